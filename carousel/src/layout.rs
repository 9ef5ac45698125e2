use alloc::format;
use alloc::string::String;

use crate::format_translate_x;

/// A single inline style assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: String,
}

impl StyleDecl {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Styles that turn the container into a clipped, horizontally laid-out, positioned box.
pub fn container_styles() -> [StyleDecl; 3] {
    [
        StyleDecl::new("display", "flex"),
        StyleDecl::new("overflow", "hidden"),
        StyleDecl::new("position", "relative"),
    ]
}

/// Styles for a single slide: full width, shrink-resistant, positioned at `offset` and animated
/// by a declarative transform transition of `transition_ms`.
pub fn slide_styles(offset: f32, transition_ms: u32) -> [StyleDecl; 5] {
    [
        StyleDecl::new("width", "100%"),
        StyleDecl::new("height", "inherit"),
        StyleDecl::new("flex-shrink", "0"),
        StyleDecl::new("transform", format_translate_x(offset)),
        StyleDecl::new("transition", transition_value(transition_ms)),
    ]
}

pub fn transition_value(transition_ms: u32) -> String {
    let secs = transition_ms as f32 / 1000.0;
    format!("transform {secs}s")
}
