/// Which way a completion moves the carousel.
///
/// `Left` advances (content slides left, next slide comes in); `Right` retreats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Still,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Touch,
    Mouse,
}

/// A normalized pointer sample: the horizontal position plus the device that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    pub x: f32,
    pub kind: PointerKind,
}

impl PointerInput {
    pub fn touch(x: f32) -> Self {
        Self {
            x,
            kind: PointerKind::Touch,
        }
    }

    pub fn mouse(x: f32) -> Self {
        Self {
            x,
            kind: PointerKind::Mouse,
        }
    }
}

/// Horizontal geometry of the carousel container, in the same space as pointer positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f32,
    pub width: f32,
}

impl Bounds {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        kind: PointerKind,
    },
}

impl GesturePhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// The outcome of resolving a slide completion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Completion {
    pub direction: Direction,
    /// `true` when the direction was supplied by the caller (navigation, edge commit).
    pub explicit: bool,
    pub previous_index: usize,
    pub index: usize,
    /// Transform offset (px) to apply to every slide.
    pub offset: f32,
    /// `false` when the gesture fell short of the commit threshold and snapped back.
    pub committed: bool,
}

impl Completion {
    pub fn changed_index(&self) -> bool {
        self.previous_index != self.index
    }
}

/// What a pointer move produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// Live offset to apply to every slide while the drag continues.
    Offset(f32),
    /// A mouse drag reached a container edge and was committed early.
    Completed(Completion),
}
