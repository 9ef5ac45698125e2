use alloc::sync::Arc;

use crate::{
    Bounds, CarouselOptions, CarouselState, Completion, Direction, DragUpdate, GesturePhase,
    PointerInput, PointerKind,
};

/// A headless gesture carousel.
///
/// This type holds no UI objects. An adapter feeds it normalized pointer samples and geometry,
/// and applies the offsets it returns to every slide:
/// - `press` / `drag` / `release` (or `cancel`) for a drag gesture
/// - `complete(Some(direction), ..)`, `next`, `prev`, `go_to` for navigation controls
///
/// Every slide shares one offset; slide `i` is visible when the offset is `-i * slide_width`.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    current_index: usize,
    gesture_origin: f32,
    gesture_latest: f32,
    base_offset: f32,
    drag_delta: f32,
    phase: GesturePhase,
}

impl Carousel {
    /// Creates a carousel positioned at `options.initial_index` (clamped into range).
    ///
    /// A carousel always has at least one slide; `slide_count == 0` is treated as 1.
    pub fn new(mut options: CarouselOptions) -> Self {
        if options.slide_count == 0 {
            cwarn!("Carousel::new: slide_count is 0, using 1");
            options.slide_count = 1;
        }
        let current_index = clamp_index(options.initial_index, options.slide_count);
        cdebug!(
            slide_count = options.slide_count,
            current_index,
            commit_threshold = options.commit_threshold,
            edge_threshold = options.edge_threshold,
            "Carousel::new"
        );
        Self {
            options,
            current_index,
            gesture_origin: 0.0,
            gesture_latest: 0.0,
            base_offset: 0.0,
            drag_delta: 0.0,
            phase: GesturePhase::Idle,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, &Completion) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn slide_count(&self) -> usize {
        self.options.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.options.slide_count
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    pub fn drag_delta(&self) -> f32 {
        self.drag_delta
    }

    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    /// The settled offset that shows slide `index`.
    pub fn offset_for(&self, index: usize, slide_width: f32) -> f32 {
        let index = index.min(self.options.slide_count - 1);
        let offset = -slide_width * index as f32;
        if offset == 0.0 { 0.0 } else { offset }
    }

    pub fn current_offset(&self, slide_width: f32) -> f32 {
        self.offset_for(self.current_index, slide_width)
    }

    /// Returns a snapshot of the mutable state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            gesture_origin: self.gesture_origin,
            gesture_latest: self.gesture_latest,
            base_offset: self.base_offset,
            drag_delta: self.drag_delta,
            phase: self.phase,
        }
    }

    /// Restores a previously captured snapshot. The index is clamped into range.
    pub fn restore_state(&mut self, state: CarouselState) {
        self.current_index = clamp_index(state.current_index, self.options.slide_count);
        self.gesture_origin = state.gesture_origin;
        self.gesture_latest = state.gesture_latest;
        self.base_offset = state.base_offset;
        self.drag_delta = state.drag_delta;
        self.phase = state.phase;
    }

    /// Starts a drag gesture.
    ///
    /// `pressed_offset` is the live transform offset of the pressed slide, or `None` when the
    /// press did not land on a slide (or its transform could not be read), in which case the
    /// baseline is `0`. A press during an active gesture restarts it from the new position.
    pub fn press(&mut self, input: PointerInput, pressed_offset: Option<f32>) {
        if self.phase.is_dragging() {
            ctrace!("press: restarting an active gesture");
        }
        self.gesture_origin = input.x;
        self.base_offset = pressed_offset.unwrap_or(0.0);
        self.drag_delta = 0.0;
        self.phase = GesturePhase::Dragging { kind: input.kind };
        ctrace!(
            origin = self.gesture_origin,
            base_offset = self.base_offset,
            kind = ?input.kind,
            "gesture start"
        );
    }

    /// Tracks a pointer move.
    ///
    /// Returns `None` when no gesture is active. Mouse drags that come within
    /// `edge_threshold` of a container edge complete immediately: the left edge retreats and the
    /// right edge advances.
    ///
    /// The right edge is `bounds.right()`. Slides are assumed to be exactly as wide as the
    /// container, so this is also `bounds.left + slide_width`.
    pub fn drag(&mut self, x: f32, bounds: Bounds, slide_width: f32) -> Option<DragUpdate> {
        let GesturePhase::Dragging { kind } = self.phase else {
            return None;
        };
        self.drag_delta = self.gesture_origin - x;

        if kind == PointerKind::Mouse {
            let edge = if x - bounds.left < self.options.edge_threshold {
                Some(Direction::Right)
            } else if bounds.right() - x < self.options.edge_threshold {
                Some(Direction::Left)
            } else {
                None
            };
            if let Some(direction) = edge {
                ctrace!(x, ?direction, "edge commit");
                self.gesture_latest = x;
                return Some(DragUpdate::Completed(
                    self.resolve(Some(direction), slide_width),
                ));
            }
        }

        Some(DragUpdate::Offset(self.base_offset - self.drag_delta))
    }

    /// Ends the active gesture at `x` and resolves an implicit completion.
    ///
    /// Returns `None` when no gesture is active (e.g. a release after an edge commit).
    pub fn release(&mut self, x: f32, slide_width: f32) -> Option<Completion> {
        if !self.phase.is_dragging() {
            return None;
        }
        self.gesture_latest = x;
        ctrace!(latest = x, "gesture end");
        Some(self.resolve(None, slide_width))
    }

    /// Abandons the active gesture and snaps back to the pre-gesture offset.
    pub fn cancel(&mut self) -> Option<Completion> {
        if !self.phase.is_dragging() {
            return None;
        }
        self.phase = GesturePhase::Idle;
        self.drag_delta = self.drag_delta.abs();
        let completion = Completion {
            direction: Direction::Still,
            explicit: false,
            previous_index: self.current_index,
            index: self.current_index,
            offset: self.base_offset,
            committed: false,
        };
        ctrace!(offset = self.base_offset, "gesture cancelled");
        self.notify(&completion);
        Some(completion)
    }

    /// Resolves a slide completion.
    ///
    /// With an explicit `direction` the commit threshold is bypassed and the index moves by one
    /// (clamped at the ends). Without one, the direction is derived from the last gesture and
    /// drags shorter than `commit_threshold` snap back to the pre-gesture offset.
    pub fn complete(&mut self, direction: Option<Direction>, slide_width: f32) -> Completion {
        self.resolve(direction, slide_width)
    }

    pub fn next(&mut self, slide_width: f32) -> Completion {
        self.resolve(Some(Direction::Left), slide_width)
    }

    pub fn prev(&mut self, slide_width: f32) -> Completion {
        self.resolve(Some(Direction::Right), slide_width)
    }

    /// Jumps straight to `index` (clamped). Always commits.
    pub fn go_to(&mut self, index: usize, slide_width: f32) -> Completion {
        let previous_index = self.current_index;
        self.current_index = clamp_index(index, self.options.slide_count);
        self.phase = GesturePhase::Idle;
        let direction = match self.current_index.cmp(&previous_index) {
            core::cmp::Ordering::Greater => Direction::Left,
            core::cmp::Ordering::Less => Direction::Right,
            core::cmp::Ordering::Equal => Direction::Still,
        };
        let completion = Completion {
            direction,
            explicit: true,
            previous_index,
            index: self.current_index,
            offset: self.current_offset(slide_width),
            committed: true,
        };
        self.notify(&completion);
        completion
    }

    /// The direction implied by the last gesture's origin and release positions.
    pub fn gesture_direction(&self) -> Direction {
        if self.gesture_latest == self.gesture_origin {
            Direction::Still
        } else if self.gesture_latest > self.gesture_origin {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    fn resolve(&mut self, explicit: Option<Direction>, slide_width: f32) -> Completion {
        let direction = explicit.unwrap_or_else(|| self.gesture_direction());
        self.drag_delta = self.drag_delta.abs();
        self.phase = GesturePhase::Idle;
        let previous_index = self.current_index;

        let completion = if explicit.is_none() && self.drag_delta < self.options.commit_threshold
        {
            Completion {
                direction,
                explicit: false,
                previous_index,
                index: previous_index,
                offset: self.base_offset,
                committed: false,
            }
        } else {
            match direction {
                Direction::Right if self.current_index > 0 => self.current_index -= 1,
                Direction::Left if self.current_index + 1 < self.options.slide_count => {
                    self.current_index += 1
                }
                _ => {}
            }
            Completion {
                direction,
                explicit: explicit.is_some(),
                previous_index,
                index: self.current_index,
                offset: self.current_offset(slide_width),
                committed: true,
            }
        };

        cdebug!(
            ?direction,
            explicit = completion.explicit,
            committed = completion.committed,
            drag_delta = self.drag_delta,
            from = previous_index,
            to = completion.index,
            offset = completion.offset,
            "complete slide"
        );
        self.notify(&completion);
        completion
    }

    fn notify(&self, completion: &Completion) {
        if let Some(cb) = &self.options.on_change {
            cb(self, completion);
        }
    }
}

fn clamp_index(index: usize, slide_count: usize) -> usize {
    let last = slide_count - 1;
    if index > last {
        cwarn!(index, slide_count, "slide index out of range, clamping");
        return last;
    }
    index
}
