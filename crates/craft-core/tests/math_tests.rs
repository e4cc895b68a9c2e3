// Range mapping and viewport-rect predicates.

use craft_core::math::{map_range, Rect};

#[test]
fn map_range_hits_both_endpoints_and_the_midpoint() {
    assert_eq!(map_range(0.0, 0.0, 100.0, 5.0, 20.0), 5.0);
    assert_eq!(map_range(100.0, 0.0, 100.0, 5.0, 20.0), 20.0);
    assert!((map_range(50.0, 0.0, 100.0, 5.0, 20.0) - 12.5).abs() < 1e-6);
}

#[test]
fn map_range_is_monotonic() {
    let mut prev = map_range(0.0, 0.0, 100.0, 5.0, 20.0);
    for v in 1..=100 {
        let mapped = map_range(v as f32, 0.0, 100.0, 5.0, 20.0);
        assert!(mapped > prev, "mapping not increasing at {v}");
        prev = mapped;
    }
}

fn rect(left: f32, top: f32, w: f32, h: f32) -> Rect {
    Rect {
        left,
        top,
        right: left + w,
        bottom: top + h,
    }
}

#[test]
fn fully_visible_requires_every_edge_inside() {
    let win = (1000.0, 700.0);
    assert!(rect(10.0, 10.0, 200.0, 100.0).fully_visible(win.0, win.1));
    assert!(!rect(-1.0, 10.0, 200.0, 100.0).fully_visible(win.0, win.1));
    assert!(!rect(10.0, 650.0, 200.0, 100.0).fully_visible(win.0, win.1));
    assert!(!rect(900.0, 10.0, 200.0, 100.0).fully_visible(win.0, win.1));
}

#[test]
fn near_viewport_allows_one_own_size_of_margin() {
    let win = (1000.0, 700.0);
    // Just above the fold, by less than its own height.
    assert!(rect(100.0, -90.0, 300.0, 100.0).near_viewport(win.0, win.1));
    // Scrolled out by more than its own height.
    assert!(!rect(100.0, -250.0, 300.0, 100.0).near_viewport(win.0, win.1));
    // Just below the fold, within its own height of margin.
    assert!(rect(100.0, 700.0, 300.0, 100.0).near_viewport(win.0, win.1));
    assert!(!rect(100.0, 900.0, 300.0, 100.0).near_viewport(win.0, win.1));
}

#[test]
fn rect_extents() {
    let r = rect(5.0, 10.0, 30.0, 40.0);
    assert_eq!(r.width(), 30.0);
    assert_eq!(r.height(), 40.0);
}
