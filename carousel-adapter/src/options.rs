use alloc::string::String;

use carousel::{
    CarouselOptions, DEFAULT_COMMIT_THRESHOLD, DEFAULT_EDGE_THRESHOLD, DEFAULT_TRANSITION_MS,
};

/// Selectors for the `(previous, next)` navigation handles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavSelectors {
    pub prev: String,
    pub next: String,
}

/// Host-level configuration for [`crate::GestureCarousel::mount`].
///
/// With `feature = "serde"` this can be deserialized; missing fields take their defaults.
/// With `feature = "toml"`, see [`SliderOptions::from_toml_str`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderOptions {
    /// Selector of the element whose children become the slides.
    pub container: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nav: Option<NavSelectors>,
    #[cfg_attr(feature = "serde", serde(default = "default_commit_threshold"))]
    pub commit_threshold: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_edge_threshold"))]
    pub edge_threshold: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_transition_ms"))]
    pub transition_ms: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_index: usize,
}

fn default_commit_threshold() -> f32 {
    DEFAULT_COMMIT_THRESHOLD
}

fn default_edge_threshold() -> f32 {
    DEFAULT_EDGE_THRESHOLD
}

fn default_transition_ms() -> u32 {
    DEFAULT_TRANSITION_MS
}

impl SliderOptions {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            nav: None,
            commit_threshold: default_commit_threshold(),
            edge_threshold: default_edge_threshold(),
            transition_ms: default_transition_ms(),
            initial_index: 0,
        }
    }

    /// Binds `(prev, next)` navigation handles.
    pub fn with_nav(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.nav = Some(NavSelectors {
            prev: prev.into(),
            next: next.into(),
        });
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

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Engine options for a container with `slide_count` children.
    pub fn carousel_options(&self, slide_count: usize) -> CarouselOptions {
        CarouselOptions::new(slide_count)
            .with_initial_index(self.initial_index)
            .with_commit_threshold(self.commit_threshold)
            .with_edge_threshold(self.edge_threshold)
            .with_transition_ms(self.transition_ms)
    }

    /// Parses options from a TOML document.
    ///
    /// ```toml
    /// container = ".slider-root"
    /// commit_threshold = 60.0
    ///
    /// [nav]
    /// prev = ".nav-left"
    /// next = ".nav-right"
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, crate::ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
