// Example: feed a recorded touch trajectory through the engine, the way a host adapter would.
use carousel::{Bounds, Carousel, CarouselOptions, DragUpdate, PointerInput, format_translate_x};

fn main() {
    let slide_width = 300.0;
    let container = Bounds::new(0.0, slide_width);
    let mut c = Carousel::new(CarouselOptions::new(3).with_on_change(Some(
        |c: &Carousel, done: &carousel::Completion| {
            println!(
                "  on_change: {:?} {} -> {} (committed={})",
                done.direction,
                done.previous_index,
                c.current_index(),
                done.committed
            );
        },
    )));

    // (start, samples..., release)
    let gestures: [&[f32]; 3] = [
        &[300.0, 280.0, 220.0, 180.0],
        &[300.0, 290.0, 260.0],
        &[100.0, 160.0, 240.0, 250.0],
    ];

    for trajectory in gestures {
        let (&start, rest) = trajectory.split_first().expect("non-empty trajectory");
        let base = c.current_offset(slide_width);
        c.press(PointerInput::touch(start), Some(base));
        for &x in rest {
            if let Some(DragUpdate::Offset(off)) = c.drag(x, container, slide_width) {
                println!("  drag x={x} -> {}", format_translate_x(off));
            }
        }
        let release = rest.last().copied().unwrap_or(start);
        if let Some(done) = c.release(release, slide_width) {
            println!(
                "release x={release}: index={} transform={}",
                done.index,
                format_translate_x(done.offset)
            );
        }
    }

    let done = c.next(slide_width);
    println!(
        "next: index={} transform={}",
        done.index,
        format_translate_x(done.offset)
    );
}
