use super::*;

// =============================================================
// progress_ratio
// =============================================================

#[test]
fn progress_ratio_is_plain_ratio_inside_range() {
    assert_eq!(progress_ratio(0.0, 1000.0), 0.0);
    assert_eq!(progress_ratio(250.0, 1000.0), 0.25);
    assert_eq!(progress_ratio(1000.0, 1000.0), 1.0);
}

#[test]
fn progress_ratio_clamps_overscroll() {
    assert_eq!(progress_ratio(1200.0, 1000.0), 1.0);
    assert_eq!(progress_ratio(-40.0, 1000.0), 0.0);
}

#[test]
fn progress_ratio_is_zero_without_scrollable_range() {
    for scroll_top in [0.0, 10.0, 500.0, -5.0] {
        assert_eq!(progress_ratio(scroll_top, 0.0), 0.0);
        assert_eq!(progress_ratio(scroll_top, -200.0), 0.0);
    }
}

#[test]
fn progress_ratio_never_produces_non_finite_values() {
    let cases = [
        (f64::NAN, 1000.0),
        (100.0, f64::NAN),
        (f64::INFINITY, 1000.0),
        (100.0, f64::INFINITY),
        (f64::NEG_INFINITY, f64::NEG_INFINITY),
    ];
    for (scroll_top, range) in cases {
        let ratio = progress_ratio(scroll_top, range);
        assert!(ratio.is_finite());
        assert_eq!(ratio, 0.0);
    }
}

#[test]
fn progress_ratio_stays_in_unit_interval_across_sweep() {
    for range in [1.0, 37.5, 640.0, 10_000.0] {
        for step in -10..=30 {
            let scroll_top = f64::from(step) * range / 20.0;
            let ratio = progress_ratio(scroll_top, range);
            assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of range");
        }
    }
}

// =============================================================
// ScrollMetrics
// =============================================================

#[test]
fn scrollable_range_subtracts_viewport() {
    assert_eq!(ScrollMetrics::new(0.0, 2000.0, 1000.0).scrollable_range(), 1000.0);
    assert_eq!(ScrollMetrics::new(0.0, 800.0, 1000.0).scrollable_range(), -200.0);
}

// =============================================================
// ScrollState
// =============================================================

#[test]
fn scroll_state_default_is_top_of_page() {
    let state = ScrollState::default();
    assert_eq!(state.progress, 0.0);
    assert_eq!(state.bar_width_style(), "width: 0%");
}

#[test]
fn scroll_state_tracks_long_page() {
    let mut state = ScrollState::default();

    state.observe(ScrollMetrics::new(0.0, 2000.0, 1000.0));
    assert_eq!(state.progress, 0.0);

    state.observe(ScrollMetrics::new(500.0, 2000.0, 1000.0));
    assert_eq!(state.progress, 0.5);
    assert_eq!(state.bar_width_style(), "width: 50%");

    state.observe(ScrollMetrics::new(1000.0, 2000.0, 1000.0));
    assert_eq!(state.progress, 1.0);
    assert_eq!(state.percent(), 100.0);
}

#[test]
fn scroll_state_stays_zero_when_content_fits_viewport() {
    let mut state = ScrollState::default();
    for scroll_top in [0.0, 100.0, 800.0, 5000.0] {
        state.observe(ScrollMetrics::new(scroll_top, 800.0, 1000.0));
        assert_eq!(state.progress, 0.0);
    }
}

#[test]
fn scroll_state_resets_when_page_shrinks_below_viewport() {
    let mut state = ScrollState::default();
    state.observe(ScrollMetrics::new(750.0, 2000.0, 1000.0));
    assert_eq!(state.progress, 0.75);

    state.observe(ScrollMetrics::new(750.0, 900.0, 1000.0));
    assert_eq!(state.progress, 0.0);
}
