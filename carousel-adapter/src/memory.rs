use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use carousel::Bounds;

use crate::{EventKind, Host};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Clone, Debug, Default)]
struct Node {
    selectors: Vec<String>,
    children: Vec<ElementId>,
    styles: BTreeMap<String, String>,
    bounds: Bounds,
}

/// An in-memory element tree implementing [`Host`].
///
/// Elements are matched by the exact selector strings they were created with (e.g. `.slider`,
/// `#next`). Listener bookkeeping is observable so callers can check what a carousel attached.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    nodes: Vec<Node>,
    listeners: BTreeMap<ListenerId, (ElementId, EventKind)>,
    next_listener: u64,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element.
    pub fn create(&mut self, selectors: &[&str], bounds: Bounds) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            bounds,
            ..Node::default()
        });
        id
    }

    pub fn append(&mut self, parent: ElementId, child: ElementId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Creates a container of `count` slides laid out side by side, each `width` wide.
    ///
    /// Returns the container and its slides.
    pub fn build_carousel(
        &mut self,
        selector: &str,
        count: usize,
        left: f32,
        width: f32,
    ) -> (ElementId, Vec<ElementId>) {
        let container = self.create(&[selector], Bounds::new(left, width));
        let slides: Vec<_> = (0..count)
            .map(|i| {
                let slide = self.create(&[], Bounds::new(left + width * i as f32, width));
                self.append(container, slide);
                slide
            })
            .collect();
        (container, slides)
    }

    pub fn set_bounds(&mut self, element: ElementId, bounds: Bounds) {
        self.nodes[element.0].bounds = bounds;
    }

    pub fn is_listening(&self, element: ElementId, kind: EventKind) -> bool {
        self.listener_count(element, kind) > 0
    }

    pub fn listener_count(&self, element: ElementId, kind: EventKind) -> usize {
        self.listeners
            .values()
            .filter(|&&(el, k)| el == element && k == kind)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }
}

impl Host for MemoryHost {
    type Element = ElementId;
    type Listener = ListenerId;

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|n| n.selectors.iter().any(|s| s == selector))
            .map(ElementId)
    }

    fn children(&self, element: &ElementId) -> Vec<ElementId> {
        self.nodes[element.0].children.clone()
    }

    fn style(&self, element: &ElementId, property: &str) -> Option<String> {
        self.nodes[element.0].styles.get(property).cloned()
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        self.nodes[element.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn width(&self, element: &ElementId) -> f32 {
        self.nodes[element.0].bounds.width
    }

    fn bounds(&self, element: &ElementId) -> Bounds {
        self.nodes[element.0].bounds
    }

    fn listen(&mut self, element: &ElementId, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (*element, kind));
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
    }
}
