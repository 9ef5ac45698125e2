use crate::*;

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_x(&mut self) -> f32 {
        self.gen_range_u64(0, 600) as f32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

const WIDTH: f32 = 300.0;

fn bounds() -> Bounds {
    Bounds::new(0.0, WIDTH)
}

fn three_slides() -> Carousel {
    Carousel::new(CarouselOptions::new(3))
}

fn swipe(c: &mut Carousel, from: f32, to: f32) -> Completion {
    let base = c.current_offset(WIDTH);
    c.press(PointerInput::touch(from), Some(base));
    c.drag(to, bounds(), WIDTH);
    c.release(to, WIDTH).unwrap()
}

#[test]
fn swipe_past_threshold_advances() {
    let mut c = three_slides();
    let done = swipe(&mut c, 300.0, 180.0);

    assert_eq!(done.direction, Direction::Left);
    assert!(done.committed);
    assert!(!done.explicit);
    assert_eq!(c.current_index(), 1);
    assert_eq!(done.offset, -300.0);
    assert_eq!(format_translate_x(done.offset), "translateX(-300px)");
    assert_eq!(c.drag_delta(), 120.0);
}

#[test]
fn short_swipe_snaps_back() {
    let mut c = three_slides();
    let done = swipe(&mut c, 300.0, 260.0);

    assert!(!done.committed);
    assert_eq!(c.current_index(), 0);
    assert_eq!(done.index, 0);
    assert_eq!(format_translate_x(done.offset), "translateX(0px)");
}

#[test]
fn short_swipe_restores_mid_transition_baseline() {
    let mut c = three_slides();
    c.next(WIDTH);
    // The pressed slide had not finished animating to -300 yet.
    c.press(PointerInput::touch(200.0), Some(-250.0));
    c.drag(150.0, bounds(), WIDTH);
    let done = c.release(150.0, WIDTH).unwrap();

    assert!(!done.committed);
    assert_eq!(c.current_index(), 1);
    assert_eq!(done.offset, -250.0);
}

#[test]
fn swipe_right_retreats_and_clamps_at_first() {
    let mut c = three_slides();
    let done = swipe(&mut c, 100.0, 250.0);
    assert_eq!(done.direction, Direction::Right);
    assert!(done.committed);
    assert_eq!(c.current_index(), 0);
    assert_eq!(format_translate_x(done.offset), "translateX(0px)");

    c.go_to(2, WIDTH);
    swipe(&mut c, 100.0, 250.0);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn long_swipe_clamps_at_last() {
    let mut c = three_slides();
    for _ in 0..5 {
        swipe(&mut c, 400.0, 100.0);
    }
    assert_eq!(c.current_index(), 2);
    assert!(c.is_last());
    assert_eq!(c.current_offset(WIDTH), -600.0);
}

#[test]
fn drag_reports_live_offset_from_baseline() {
    let mut c = three_slides();
    c.next(WIDTH);
    c.press(PointerInput::touch(200.0), Some(-300.0));

    assert_eq!(
        c.drag(150.0, bounds(), WIDTH),
        Some(DragUpdate::Offset(-350.0))
    );
    assert_eq!(c.drag_delta(), 50.0);
    assert_eq!(
        c.drag(260.0, bounds(), WIDTH),
        Some(DragUpdate::Offset(-240.0))
    );
    assert_eq!(c.drag_delta(), -60.0);
}

#[test]
fn press_outside_a_slide_uses_zero_baseline() {
    let mut c = three_slides();
    c.next(WIDTH);
    c.press(PointerInput::touch(100.0), None);
    assert_eq!(c.base_offset(), 0.0);
}

#[test]
fn explicit_completion_ignores_threshold() {
    let mut c = three_slides();
    c.press(PointerInput::touch(100.0), Some(0.0));
    c.drag(95.0, bounds(), WIDTH);

    let done = c.complete(Some(Direction::Left), WIDTH);
    assert!(done.explicit);
    assert!(done.committed);
    assert_eq!(c.current_index(), 1);
    assert!(!c.is_dragging());

    let done = c.complete(Some(Direction::Right), WIDTH);
    assert_eq!(c.current_index(), 0);
    assert_eq!(done.offset, 0.0);
}

#[test]
fn next_at_last_slide_reapplies_offset() {
    let mut c = three_slides();
    c.next(WIDTH);
    c.next(WIDTH);
    let done = c.next(WIDTH);

    assert_eq!(done.previous_index, 2);
    assert_eq!(done.index, 2);
    assert!(!done.changed_index());
    assert!(done.committed);
    assert_eq!(done.offset, -600.0);
}

#[test]
fn prev_at_first_slide_is_noop() {
    let mut c = three_slides();
    let done = c.prev(WIDTH);
    assert_eq!(done.index, 0);
    assert!(c.is_first());
}

#[test]
fn mouse_drag_near_right_edge_commits_before_release() {
    let mut c = Carousel::new(CarouselOptions::new(3));
    let container = Bounds::new(100.0, 300.0);
    c.press(PointerInput::mouse(250.0), Some(0.0));

    assert!(matches!(
        c.drag(300.0, container, WIDTH),
        Some(DragUpdate::Offset(_))
    ));
    let Some(DragUpdate::Completed(done)) = c.drag(365.0, container, WIDTH) else {
        panic!("expected an edge commit");
    };
    assert_eq!(done.direction, Direction::Left);
    assert!(done.explicit);
    assert_eq!(c.current_index(), 1);
    assert!(!c.is_dragging());

    // The release that follows has no gesture to end.
    assert_eq!(c.release(365.0, WIDTH), None);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn mouse_drag_near_left_edge_retreats() {
    let mut c = Carousel::new(CarouselOptions::new(3).with_initial_index(2));
    c.press(PointerInput::mouse(200.0), Some(-600.0));

    let Some(DragUpdate::Completed(done)) = c.drag(30.0, bounds(), WIDTH) else {
        panic!("expected an edge commit");
    };
    assert_eq!(done.direction, Direction::Right);
    assert_eq!(done.index, 1);
    assert_eq!(done.offset, -300.0);
}

#[test]
fn right_edge_follows_container_bounds_not_slide_width() {
    let mut c = three_slides();
    let wide = Bounds::new(0.0, 2.0 * WIDTH);
    c.press(PointerInput::mouse(200.0), Some(0.0));

    // Past `left + slide_width` but far from the container's right bound.
    assert_eq!(c.drag(290.0, wide, WIDTH), Some(DragUpdate::Offset(90.0)));
    assert!(c.is_dragging());

    let Some(DragUpdate::Completed(done)) = c.drag(570.0, wide, WIDTH) else {
        panic!("expected an edge commit");
    };
    assert_eq!(done.direction, Direction::Left);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn touch_drag_never_commits_at_edges() {
    let mut c = three_slides();
    c.press(PointerInput::touch(150.0), Some(0.0));
    assert_eq!(
        c.drag(295.0, bounds(), WIDTH),
        Some(DragUpdate::Offset(145.0))
    );
    assert!(c.is_dragging());
}

#[test]
fn edge_threshold_is_configurable() {
    let mut c = Carousel::new(CarouselOptions::new(3).with_edge_threshold(10.0));
    c.press(PointerInput::mouse(150.0), Some(0.0));
    assert!(matches!(
        c.drag(275.0, bounds(), WIDTH),
        Some(DragUpdate::Offset(_))
    ));
    assert!(matches!(
        c.drag(295.0, bounds(), WIDTH),
        Some(DragUpdate::Completed(_))
    ));
}

#[test]
fn commit_threshold_is_configurable() {
    let mut c = Carousel::new(CarouselOptions::new(3).with_commit_threshold(30.0));
    swipe(&mut c, 300.0, 260.0);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn moves_and_releases_without_a_gesture_are_ignored() {
    let mut c = three_slides();
    assert_eq!(c.drag(10.0, bounds(), WIDTH), None);
    assert_eq!(c.release(10.0, WIDTH), None);
    assert_eq!(c.cancel(), None);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn cancel_snaps_back_without_changing_index() {
    let mut c = three_slides();
    c.next(WIDTH);
    c.press(PointerInput::touch(300.0), Some(-300.0));
    c.drag(50.0, bounds(), WIDTH);

    let done = c.cancel().unwrap();
    assert!(!done.committed);
    assert_eq!(done.offset, -300.0);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.phase(), GesturePhase::Idle);
}

#[test]
fn rightward_drag_delta_is_stored_as_distance() {
    let mut c = three_slides();
    c.next(WIDTH);
    swipe(&mut c, 100.0, 150.0);
    assert_eq!(c.drag_delta(), 50.0);
    assert_eq!(c.current_index(), 1);

    c.press(PointerInput::touch(100.0), Some(-300.0));
    c.drag(220.0, bounds(), WIDTH);
    assert_eq!(c.drag_delta(), -120.0);
    c.cancel();
    assert_eq!(c.drag_delta(), 120.0);

    swipe(&mut c, 100.0, 200.0);
    assert_eq!(c.drag_delta(), 100.0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn tap_without_movement_is_still() {
    let mut c = three_slides();
    c.press(PointerInput::touch(120.0), Some(0.0));
    let done = c.release(120.0, WIDTH).unwrap();
    assert_eq!(done.direction, Direction::Still);
    assert!(!done.committed);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn new_clamps_slide_count_and_initial_index() {
    let c = Carousel::new(CarouselOptions::new(0));
    assert_eq!(c.slide_count(), 1);
    assert!(c.is_first() && c.is_last());

    let c = Carousel::new(CarouselOptions::new(4).with_initial_index(9));
    assert_eq!(c.current_index(), 3);
}

#[test]
fn in_range_indices_are_kept_and_out_of_range_land_on_last() {
    let c = Carousel::new(CarouselOptions::new(4).with_initial_index(3));
    assert_eq!(c.current_index(), 3);

    let mut c = three_slides();
    let done = c.go_to(usize::MAX, WIDTH);
    assert_eq!(done.index, 2);
    assert_eq!(done.offset, -600.0);
    assert_eq!(c.go_to(1, WIDTH).index, 1);

    c.restore_state(CarouselState {
        current_index: 2,
        ..CarouselState::default()
    });
    assert_eq!(c.current_index(), 2);
    c.restore_state(CarouselState {
        current_index: 3,
        ..CarouselState::default()
    });
    assert_eq!(c.current_index(), 2);
}

#[test]
fn go_to_clamps_and_reports_direction() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    let done = c.go_to(10, WIDTH);
    assert_eq!(done.index, 4);
    assert_eq!(done.direction, Direction::Left);
    assert_eq!(done.offset, -1200.0);

    let done = c.go_to(1, WIDTH);
    assert_eq!(done.direction, Direction::Right);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn on_change_fires_for_every_completion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut c = Carousel::new(CarouselOptions::new(3).with_on_change(Some(
        move |c: &Carousel, done: &Completion| {
            assert_eq!(c.current_index(), done.index);
            seen.fetch_add(1, Ordering::Relaxed);
        },
    )));

    c.next(WIDTH);
    swipe(&mut c, 300.0, 290.0);
    c.press(PointerInput::touch(0.0), None);
    c.cancel();
    c.go_to(0, WIDTH);
    assert_eq!(calls.load(Ordering::Relaxed), 4);

    c.set_on_change(None::<fn(&Carousel, &Completion)>);
    c.next(WIDTH);
    assert_eq!(calls.load(Ordering::Relaxed), 4);
}

#[test]
fn state_round_trips_through_restore() {
    let mut c = three_slides();
    c.next(WIDTH);
    c.press(PointerInput::mouse(200.0), Some(-300.0));
    c.drag(180.0, Bounds::new(0.0, 1000.0), WIDTH);
    let snapshot = c.state();

    let mut other = three_slides();
    other.restore_state(snapshot);
    assert_eq!(other.state(), snapshot);
    assert!(other.is_dragging());

    other.restore_state(CarouselState {
        current_index: 99,
        ..CarouselState::default()
    });
    assert_eq!(other.current_index(), 2);
}

#[test]
fn index_stays_in_range_under_random_input() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..50 {
        let count = rng.gen_range_usize(1, 8);
        let mut c = Carousel::new(CarouselOptions::new(count));
        for _ in 0..200 {
            match rng.gen_range_usize(0, 6) {
                0 => {
                    let kind = if rng.gen_bool() {
                        PointerInput::mouse(rng.gen_x())
                    } else {
                        PointerInput::touch(rng.gen_x())
                    };
                    let base = c.current_offset(WIDTH);
                    c.press(kind, Some(base));
                }
                1 | 2 => {
                    let _ = c.drag(rng.gen_x(), Bounds::new(0.0, 600.0), WIDTH);
                }
                3 => {
                    let _ = c.release(rng.gen_x(), WIDTH);
                }
                4 => {
                    let dir = if rng.gen_bool() {
                        Direction::Left
                    } else {
                        Direction::Right
                    };
                    let before = c.current_index();
                    c.complete(Some(dir), WIDTH);
                    let expected = match dir {
                        Direction::Left => (before + 1).min(count - 1),
                        _ => before.saturating_sub(1),
                    };
                    assert_eq!(c.current_index(), expected);
                }
                _ => {
                    let _ = c.cancel();
                }
            }
            assert!(c.current_index() < count);
        }
    }
}

#[test]
fn parse_translate_x_reads_leading_integer() {
    assert_eq!(parse_translate_x("translateX(-300px)"), Some(-300.0));
    assert_eq!(parse_translate_x("translateX(0px)"), Some(0.0));
    assert_eq!(parse_translate_x("translateX(-299.6px)"), Some(-299.0));
    assert_eq!(parse_translate_x("translateX(5-3px)"), Some(5.0));
    assert_eq!(parse_translate_x("translateX(--5px)"), None);
    assert_eq!(parse_translate_x("none"), None);
    assert_eq!(parse_translate_x(""), None);
}

#[test]
fn slide_styles_describe_full_width_panels() {
    let styles = slide_styles(-300.0, 250);
    let get = |p: &str| {
        styles
            .iter()
            .find(|d| d.property == p)
            .map(|d| d.value.as_str())
    };
    assert_eq!(get("width"), Some("100%"));
    assert_eq!(get("height"), Some("inherit"));
    assert_eq!(get("flex-shrink"), Some("0"));
    assert_eq!(get("transform"), Some("translateX(-300px)"));
    assert_eq!(get("transition"), Some("transform 0.25s"));

    let container = container_styles();
    assert_eq!(container[0].property, "display");
    assert_eq!(container[0].value, "flex");
}
