// Cursor trail: bounded FIFO, speed-to-size mapping and monotonic fade-out.

use craft_core::constants::{TRAIL_ALPHA_INITIAL, TRAIL_MAX_POINTS};
use craft_core::trail::CursorTrail;
use glam::Vec2;

#[test]
fn length_is_capped_and_oldest_point_is_evicted_first() {
    let mut trail = CursorTrail::default();
    for i in 0..(TRAIL_MAX_POINTS + 1) {
        trail.record(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(trail.len(), TRAIL_MAX_POINTS);
    let first = trail.points().next().expect("non-empty trail");
    assert_eq!(
        first.position,
        Vec2::new(1.0, 0.0),
        "the very first sample should have been dropped"
    );
}

#[test]
fn size_maps_speed_linearly_onto_the_size_range() {
    let mut trail = CursorTrail::default();

    // First sample has no predecessor: speed 0 -> minimum size.
    trail.record(Vec2::new(0.0, 0.0));
    // 3-4-5 triangle, distance 50 -> midpoint of the range.
    trail.record(Vec2::new(30.0, 40.0));
    // Far jump, clamped to 100 -> maximum size.
    trail.record(Vec2::new(330.0, 440.0));
    // No movement -> minimum size again.
    trail.record(Vec2::new(330.0, 440.0));

    let sizes: Vec<f32> = trail.points().map(|p| p.size).collect();
    assert!((sizes[0] - 5.0).abs() < 1e-5, "speed 0 -> size 5");
    assert!((sizes[1] - 12.5).abs() < 1e-5, "speed 50 -> size 12.5");
    assert!((sizes[2] - 20.0).abs() < 1e-5, "clamped speed -> size 20");
    assert!((sizes[3] - 5.0).abs() < 1e-5);
}

#[test]
fn alpha_decreases_strictly_until_removal() {
    let mut trail = CursorTrail::default();
    trail.record(Vec2::new(10.0, 10.0));

    let mut last_alpha = TRAIL_ALPHA_INITIAL;
    let mut ticks = 0;
    while !trail.is_empty() {
        trail.tick();
        ticks += 1;
        if let Some(pt) = trail.points().next() {
            assert!(
                pt.alpha < last_alpha,
                "alpha must strictly decrease (tick {ticks})"
            );
            last_alpha = pt.alpha;
        }
        assert!(ticks < 100, "trail point never faded out");
    }

    // 0.4 / 0.02 steps, give or take float accumulation.
    assert!(
        (20..=21).contains(&ticks),
        "expected fade-out in about 20 ticks, took {ticks}"
    );
}

#[test]
fn points_fade_independently_of_recording_order() {
    let mut trail = CursorTrail::default();
    trail.record(Vec2::new(0.0, 0.0));
    for _ in 0..10 {
        trail.tick();
    }
    trail.record(Vec2::new(5.0, 5.0));

    let alphas: Vec<f32> = trail.points().map(|p| p.alpha).collect();
    assert_eq!(alphas.len(), 2);
    assert!(
        alphas[0] < alphas[1],
        "the older point must be further along its fade"
    );
}

#[test]
fn empty_trail_ticks_harmlessly() {
    let mut trail = CursorTrail::new(4);
    trail.tick();
    assert!(trail.is_empty());
    assert_eq!(trail.len(), 0);
}
