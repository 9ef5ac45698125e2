use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use carousel::Bounds;

use crate::EventKind;

/// The platform element tree a [`crate::GestureCarousel`] drives.
///
/// A DOM binding maps these onto `querySelector`, `children`, inline `style`, `offsetWidth`,
/// `getBoundingClientRect` and `addEventListener`/`removeEventListener`. [`crate::MemoryHost`]
/// is an in-memory implementation.
pub trait Host {
    type Element: Clone + PartialEq + fmt::Debug;
    /// A handle returned by `listen` that detaches exactly that listener.
    type Listener: fmt::Debug;

    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Direct children in source order.
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Live rendered width.
    fn width(&self, element: &Self::Element) -> f32;

    /// Horizontal bounds in the same space as pointer positions.
    fn bounds(&self, element: &Self::Element) -> Bounds;

    fn listen(&mut self, element: &Self::Element, kind: EventKind) -> Self::Listener;

    fn unlisten(&mut self, listener: Self::Listener);
}
