use padel_scorer::term::{fingerprint, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
    assert!(t.should_render(2, 1));
}

#[test]
fn render_throttle_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
    assert!(!t.should_render(260, 1));
}

#[test]
fn render_throttle_invalidate_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 7));
    assert!(!t.should_render(5, 7));
    t.invalidate();
    assert!(t.should_render(6, 7));
    assert!(!t.should_render(7, 7));
}

#[test]
fn fingerprint_is_stable_and_discriminating() {
    assert_eq!(fingerprint(&("15 - 0", 80u16, 24u16)), fingerprint(&("15 - 0", 80u16, 24u16)));
    assert_ne!(fingerprint(&("15 - 0", 80u16, 24u16)), fingerprint(&("15 - 0", 81u16, 24u16)));
}
