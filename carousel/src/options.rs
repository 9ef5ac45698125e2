use alloc::sync::Arc;

use crate::Completion;
use crate::carousel::Carousel;

/// Minimum net drag distance (px) that changes slides instead of snapping back.
pub const DEFAULT_COMMIT_THRESHOLD: f32 = 80.0;
/// Proximity (px) to a container edge at which a mouse drag commits early.
pub const DEFAULT_EDGE_THRESHOLD: f32 = 40.0;
pub const DEFAULT_TRANSITION_MS: u32 = 250;

/// A callback fired after every completion (gesture end, edge commit, navigation, cancel).
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, &Completion) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback lives in an `Arc`.
pub struct CarouselOptions {
    /// Number of slides. Fixed for the carousel's lifetime.
    pub slide_count: usize,
    /// Starting slide; clamped into range by `Carousel::new`.
    pub initial_index: usize,
    pub commit_threshold: f32,
    /// Only mouse drags use this; touch drags never commit before release.
    pub edge_threshold: f32,
    /// Duration of the declarative transform transition the host applies to slides.
    pub transition_ms: u32,
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            initial_index: 0,
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            transition_ms: DEFAULT_TRANSITION_MS,
            on_change: None,
        }
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_commit_threshold(mut self, commit_threshold: f32) -> Self {
        self.commit_threshold = commit_threshold;
        self
    }

    pub fn with_edge_threshold(mut self, edge_threshold: f32) -> Self {
        self.edge_threshold = edge_threshold;
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u32) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, &Completion) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            slide_count: self.slide_count,
            initial_index: self.initial_index,
            commit_threshold: self.commit_threshold,
            edge_threshold: self.edge_threshold,
            transition_ms: self.transition_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("slide_count", &self.slide_count)
            .field("initial_index", &self.initial_index)
            .field("commit_threshold", &self.commit_threshold)
            .field("edge_threshold", &self.edge_threshold)
            .field("transition_ms", &self.transition_ms)
            .finish_non_exhaustive()
    }
}
