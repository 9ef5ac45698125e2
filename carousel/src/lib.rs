//! A headless gesture carousel engine.
//!
//! For host bindings (listener wiring, style application, event normalization), see the
//! `carousel-adapter` crate.
//!
//! This crate owns the one piece of a carousel with real decision logic: turning a continuous
//! drag trajectory into a discrete slide transition. A drag shorter than the commit threshold
//! snaps back; a longer one advances or retreats by one slide. Navigation controls bypass the
//! threshold entirely.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - normalized pointer samples (`PointerInput`)
//! - the container bounds and the live slide width
//! - the live transform of the pressed slide
//!
//! and to write the returned offsets to every slide's transform, letting a declarative
//! transition animate the change.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod layout;
mod options;
mod state;
mod transform;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use layout::{StyleDecl, container_styles, slide_styles, transition_value};
pub use options::{
    CarouselOptions, DEFAULT_COMMIT_THRESHOLD, DEFAULT_EDGE_THRESHOLD, DEFAULT_TRANSITION_MS,
    OnChangeCallback,
};
pub use state::CarouselState;
pub use transform::{format_translate_x, parse_translate_x};
pub use types::{
    Bounds, Completion, Direction, DragUpdate, GesturePhase, PointerInput, PointerKind,
};
