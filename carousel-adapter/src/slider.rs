use alloc::vec::Vec;
use core::fmt;

use carousel::{
    Carousel, Completion, Direction, DragUpdate, PointerInput, container_styles,
    format_translate_x, parse_translate_x, slide_styles,
};

use crate::listener::ListenerSlot;
use crate::{
    EventKind, EventResponse, Host, HostEvent, MountError, MousePhase, SliderOptions, TouchPhase,
};

const SLIDE_EVENTS: [EventKind; 6] = [
    EventKind::TouchStart,
    EventKind::TouchMove,
    EventKind::TouchEnd,
    EventKind::TouchCancel,
    EventKind::MouseDown,
    EventKind::MouseUp,
];

/// A carousel mounted on a host element tree.
///
/// Owns the engine state and the listener handles; the host stays owned by the caller and is
/// passed into every call. Route each event the host delivers to [`Self::handle_event`].
pub struct GestureCarousel<H: Host> {
    engine: Carousel,
    container: H::Element,
    slides: Vec<H::Element>,
    nav: Option<(H::Element, H::Element)>,
    listeners: Vec<H::Listener>,
    drag_move: ListenerSlot<H::Listener>,
    initialized: bool,
}

impl<H: Host> GestureCarousel<H> {
    /// Locates the container and (optionally) the navigation handles, and captures the
    /// container's children as the fixed slide sequence.
    ///
    /// A missing navigation handle is not an error: the carousel mounts without click wiring.
    pub fn mount(host: &H, options: &SliderOptions) -> Result<Self, MountError> {
        let container = host
            .query(&options.container)
            .ok_or_else(|| MountError::ContainerNotFound(options.container.clone()))?;
        let slides = host.children(&container);
        if slides.is_empty() {
            return Err(MountError::NoSlides(options.container.clone()));
        }

        // Click wiring needs both handles; otherwise only gestures page the carousel.
        let nav = options.nav.as_ref().and_then(|sel| {
            match (host.query(&sel.prev), host.query(&sel.next)) {
                (Some(prev), Some(next)) => Some((prev, next)),
                _ => {
                    cwarn!(
                        prev = %sel.prev,
                        next = %sel.next,
                        "navigation handle not found; gestures only"
                    );
                    None
                }
            }
        });

        cdebug!(
            container = %options.container,
            slides = slides.len(),
            nav = nav.is_some(),
            "GestureCarousel::mount"
        );

        Ok(Self {
            engine: Carousel::new(options.carousel_options(slides.len())),
            container,
            slides,
            nav,
            listeners: Vec::new(),
            drag_move: ListenerSlot::new(),
            initialized: false,
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.engine
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.engine
    }

    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    pub fn container(&self) -> &H::Element {
        &self.container
    }

    pub fn slides(&self) -> &[H::Element] {
        &self.slides
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a mouse drag currently holds the move listener.
    pub fn is_tracking_mouse(&self) -> bool {
        self.drag_move.is_held()
    }

    /// Applies the initial layout and attaches the gesture and navigation listeners.
    ///
    /// Calling this again is ignored.
    pub fn initialize(&mut self, host: &mut H) {
        if self.initialized {
            cwarn!("GestureCarousel::initialize called twice; ignoring");
            return;
        }
        self.initialized = true;

        for decl in container_styles() {
            host.set_style(&self.container, decl.property, &decl.value);
        }
        let transition_ms = self.engine.options().transition_ms;
        for slide in &self.slides {
            for decl in slide_styles(0.0, transition_ms) {
                host.set_style(slide, decl.property, &decl.value);
            }
        }
        if self.engine.current_index() > 0 {
            let offset = self.engine.current_offset(self.slide_width(host));
            self.apply_offset(host, offset);
        }

        for slide in &self.slides {
            for kind in SLIDE_EVENTS {
                self.listeners.push(host.listen(slide, kind));
            }
        }
        if let Some((prev, next)) = &self.nav {
            self.listeners.push(host.listen(prev, EventKind::Click));
            self.listeners.push(host.listen(next, EventKind::Click));
        }
        cdebug!(listeners = self.listeners.len(), "GestureCarousel::initialize");
    }

    /// Detaches every listener this carousel attached. Styles are left in place.
    pub fn unmount(&mut self, host: &mut H) {
        self.drag_move.release(host);
        for listener in self.listeners.drain(..) {
            host.unlisten(listener);
        }
        self.initialized = false;
    }

    /// Live width of the first slide.
    pub fn slide_width(&self, host: &H) -> f32 {
        host.width(&self.slides[0])
    }

    /// Handles an event the host delivered on `target`.
    pub fn handle_event(
        &mut self,
        host: &mut H,
        target: &H::Element,
        event: &HostEvent,
    ) -> EventResponse {
        match event {
            HostEvent::Click => self.on_click(host, target),
            HostEvent::Touch { phase, .. } => {
                if *phase == TouchPhase::Cancel {
                    return self.on_cancel(host);
                }
                let Some(input) = event.pointer() else {
                    return EventResponse::default();
                };
                match phase {
                    TouchPhase::Start => {
                        let pressed = self.pressed_offset(host, target);
                        self.engine.press(input, pressed);
                        EventResponse::default()
                    }
                    TouchPhase::Move => self.on_move(host, input.x),
                    TouchPhase::End => self.on_release(host, input.x),
                    TouchPhase::Cancel => self.on_cancel(host),
                }
            }
            HostEvent::Mouse { phase, x } => match phase {
                MousePhase::Down => {
                    let pressed = self.pressed_offset(host, target);
                    self.engine.press(PointerInput::mouse(*x), pressed);
                    self.drag_move
                        .acquire(host, &self.container, EventKind::MouseMove);
                    EventResponse {
                        prevent_default: true,
                        completion: None,
                    }
                }
                MousePhase::Move => {
                    if !self.drag_move.is_held() {
                        return EventResponse::default();
                    }
                    self.on_move(host, *x)
                }
                MousePhase::Up => self.on_release(host, *x),
            },
        }
    }

    /// Advances one slide, as the "next" handle does.
    pub fn next(&mut self, host: &mut H) -> Completion {
        self.complete(host, Direction::Left)
    }

    /// Retreats one slide, as the "previous" handle does.
    pub fn prev(&mut self, host: &mut H) -> Completion {
        self.complete(host, Direction::Right)
    }

    pub fn go_to(&mut self, host: &mut H, index: usize) -> Completion {
        let width = self.slide_width(host);
        let completion = self.engine.go_to(index, width);
        self.settle(host, &completion);
        completion
    }

    /// Resolves an explicit completion and applies it to every slide.
    pub fn complete(&mut self, host: &mut H, direction: Direction) -> Completion {
        let width = self.slide_width(host);
        let completion = self.engine.complete(Some(direction), width);
        self.settle(host, &completion);
        completion
    }

    fn on_click(&mut self, host: &mut H, target: &H::Element) -> EventResponse {
        let direction = match &self.nav {
            Some((_, next)) if next == target => Direction::Left,
            Some((prev, _)) if prev == target => Direction::Right,
            _ => return EventResponse::default(),
        };
        let completion = self.complete(host, direction);
        EventResponse {
            prevent_default: false,
            completion: Some(completion),
        }
    }

    fn on_move(&mut self, host: &mut H, x: f32) -> EventResponse {
        let width = self.slide_width(host);
        let bounds = host.bounds(&self.container);
        match self.engine.drag(x, bounds, width) {
            Some(DragUpdate::Offset(offset)) => {
                self.apply_offset(host, offset);
                EventResponse::default()
            }
            Some(DragUpdate::Completed(completion)) => {
                self.settle(host, &completion);
                EventResponse {
                    prevent_default: false,
                    completion: Some(completion),
                }
            }
            None => EventResponse::default(),
        }
    }

    fn on_release(&mut self, host: &mut H, x: f32) -> EventResponse {
        self.drag_move.release(host);
        let width = self.slide_width(host);
        let completion = self.engine.release(x, width);
        if let Some(completion) = &completion {
            self.settle(host, completion);
        }
        EventResponse {
            prevent_default: false,
            completion,
        }
    }

    fn on_cancel(&mut self, host: &mut H) -> EventResponse {
        let completion = self.engine.cancel();
        if let Some(completion) = &completion {
            self.settle(host, completion);
        }
        EventResponse {
            prevent_default: false,
            completion,
        }
    }

    /// Every completion funnels through here, so the drag listener cannot outlive a gesture.
    fn settle(&mut self, host: &mut H, completion: &Completion) {
        if !self.engine.is_dragging() && self.drag_move.release(host) {
            ctrace!("released mouse move listener");
        }
        self.apply_offset(host, completion.offset);
    }

    fn apply_offset(&self, host: &mut H, offset: f32) {
        let transform = format_translate_x(offset);
        for slide in &self.slides {
            host.set_style(slide, "transform", &transform);
        }
    }

    /// The live transform offset of `target`, if it is one of the slides.
    fn pressed_offset(&self, host: &H, target: &H::Element) -> Option<f32> {
        if !self.slides.contains(target) {
            return None;
        }
        host.style(target, "transform")
            .and_then(|t| parse_translate_x(&t))
    }
}

impl<H: Host> fmt::Debug for GestureCarousel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCarousel")
            .field("engine", &self.engine)
            .field("container", &self.container)
            .field("slides", &self.slides.len())
            .field("nav", &self.nav)
            .field("listeners", &self.listeners.len())
            .field("drag_move", &self.drag_move)
            .field("initialized", &self.initialized)
            .finish()
    }
}
