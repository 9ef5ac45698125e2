//! Host bindings for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only decides where the slides should be. This crate
//! does the platform-facing half through a small [`Host`] trait:
//!
//! - applies the carousel layout (clipped flex row, full-width slides, transform transition)
//! - attaches touch/mouse/click listeners and routes host events into the engine
//! - writes the resulting offsets to every slide's `transform`
//! - holds the mouse-move listener only while a mouse drag is active
//!
//! [`MemoryHost`] is an in-memory host for tests and headless simulation.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod event;
mod host;
mod listener;
mod memory;
mod options;
mod slider;


#[cfg(feature = "toml")]
pub use error::ConfigError;
pub use error::MountError;
pub use event::{EventKind, EventResponse, HostEvent, MousePhase, TouchPhase};
pub use host::Host;
pub use memory::{ElementId, ListenerId, MemoryHost};
pub use options::{NavSelectors, SliderOptions};
pub use slider::GestureCarousel;
