// Example: mount a carousel on the in-memory host and drive it with host events.
//
// A DOM binding follows the same flow: mount + initialize once, then forward every event the
// listeners receive to `handle_event` with the element it was delivered on.
use carousel_adapter::{
    EventKind, GestureCarousel, Host, HostEvent, MemoryHost, MousePhase, SliderOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut host = MemoryHost::new();
    let (container, slides) = host.build_carousel(".slider-root", 3, 0.0, 300.0);
    let prev = host.create(&[".nav-left"], Default::default());
    let next = host.create(&[".nav-right"], Default::default());

    let options = SliderOptions::new(".slider-root").with_nav(".nav-left", ".nav-right");
    let mut gc = GestureCarousel::mount(&host, &options)?;
    gc.initialize(&mut host);
    println!("listeners after initialize: {}", host.total_listeners());

    let report = |host: &MemoryHost, label: &str, index: usize| {
        println!(
            "{label}: index={index} transform={}",
            host.style(&slides[0], "transform").unwrap_or_default()
        );
    };

    // Touch swipe to the left: advances.
    for event in [
        HostEvent::touch_start(300.0),
        HostEvent::touch_move(180.0),
        HostEvent::touch_end(180.0),
    ] {
        gc.handle_event(&mut host, &slides[0], &event);
    }
    report(&host, "touch swipe", gc.current_index());

    // Mouse drag toward the right edge commits before the button is released.
    let down = HostEvent::mouse(MousePhase::Down, 150.0);
    gc.handle_event(&mut host, &slides[1], &down);
    println!(
        "mouse move listener attached: {}",
        host.is_listening(container, EventKind::MouseMove)
    );
    let drag = HostEvent::mouse(MousePhase::Move, 280.0);
    let res = gc.handle_event(&mut host, &slides[1], &drag);
    println!("edge commit: {:?}", res.completion);
    let up = HostEvent::mouse(MousePhase::Up, 280.0);
    gc.handle_event(&mut host, &slides[1], &up);
    report(&host, "mouse drag", gc.current_index());

    // Navigation handles.
    gc.handle_event(&mut host, &next, &HostEvent::Click);
    report(&host, "next at last slide", gc.current_index());
    gc.handle_event(&mut host, &prev, &HostEvent::Click);
    report(&host, "prev", gc.current_index());

    gc.unmount(&mut host);
    println!("listeners after unmount: {}", host.total_listeners());
    Ok(())
}
