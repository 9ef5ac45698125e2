use crate::GesturePhase;

/// A lightweight, serializable snapshot of the carousel's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_index: usize,
    /// Pointer X at gesture start. Meaningful only while a gesture is active.
    pub gesture_origin: f32,
    /// Pointer X at the last gesture release.
    pub gesture_latest: f32,
    /// Transform offset of the pressed slide when the gesture began.
    pub base_offset: f32,
    /// `origin - current` while dragging; absolute value after a completion.
    pub drag_delta: f32,
    pub phase: GesturePhase,
}
