use alloc::vec::Vec;

use carousel::PointerInput;

/// The event types a carousel subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    MouseDown,
    MouseMove,
    MouseUp,
    Click,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MousePhase {
    Down,
    Move,
    Up,
}

/// A host input event, tagged by device at the boundary so the engine never inspects event shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    Touch {
        phase: TouchPhase,
        /// X positions of the touches currently on the surface.
        touches: Vec<f32>,
        /// X positions of the touches that changed in this event (the lifted ones on end).
        changed: Vec<f32>,
    },
    Mouse {
        phase: MousePhase,
        x: f32,
    },
    Click,
}

impl HostEvent {
    pub fn touch_start(x: f32) -> Self {
        Self::Touch {
            phase: TouchPhase::Start,
            touches: alloc::vec![x],
            changed: alloc::vec![x],
        }
    }

    pub fn touch_move(x: f32) -> Self {
        Self::Touch {
            phase: TouchPhase::Move,
            touches: alloc::vec![x],
            changed: alloc::vec![x],
        }
    }

    pub fn touch_end(x: f32) -> Self {
        Self::Touch {
            phase: TouchPhase::End,
            touches: Vec::new(),
            changed: alloc::vec![x],
        }
    }

    pub fn touch_cancel(x: f32) -> Self {
        Self::Touch {
            phase: TouchPhase::Cancel,
            touches: Vec::new(),
            changed: alloc::vec![x],
        }
    }

    pub fn mouse(phase: MousePhase, x: f32) -> Self {
        Self::Mouse { phase, x }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Touch { phase, .. } => match phase {
                TouchPhase::Start => EventKind::TouchStart,
                TouchPhase::Move => EventKind::TouchMove,
                TouchPhase::End => EventKind::TouchEnd,
                TouchPhase::Cancel => EventKind::TouchCancel,
            },
            Self::Mouse { phase, .. } => match phase {
                MousePhase::Down => EventKind::MouseDown,
                MousePhase::Move => EventKind::MouseMove,
                MousePhase::Up => EventKind::MouseUp,
            },
            Self::Click => EventKind::Click,
        }
    }

    /// Normalizes the event into the engine's pointer sample.
    ///
    /// Touch starts and moves read the first active touch; ends and cancels read the first
    /// changed touch, since the lifted finger is no longer in `touches`. Returns `None` for
    /// clicks and for touch events that carry no position.
    pub fn pointer(&self) -> Option<PointerInput> {
        match self {
            Self::Touch {
                phase,
                touches,
                changed,
            } => {
                let list = match phase {
                    TouchPhase::Start | TouchPhase::Move => touches,
                    TouchPhase::End | TouchPhase::Cancel => changed,
                };
                list.first().map(|&x| PointerInput::touch(x))
            }
            Self::Mouse { x, .. } => Some(PointerInput::mouse(*x)),
            Self::Click => None,
        }
    }
}

/// What handling an event did, for the host to act on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventResponse {
    /// The host should suppress its default behaviour (native drag of images/text).
    pub prevent_default: bool,
    /// Set when the event resolved a slide completion.
    pub completion: Option<carousel::Completion>,
}
