use super::*;

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_links_point_at_section_anchors() {
    let anchors: Vec<&str> = NAV_LINKS.iter().map(|link| link.anchor).collect();
    assert_eq!(anchors, vec![FEATURES_ANCHOR, METHOD_ANCHOR, RANKS_ANCHOR]);
    assert_eq!(NAV_LINKS[1].href(), "#method");
}

#[test]
fn footer_links_are_placeholders_in_order() {
    assert_eq!(FOOTER_LINKS, &["Privacy", "Terms", "Support", "Twitter"]);
}

// =============================================================
// Features and exit steps
// =============================================================

#[test]
fn features_have_copy_and_accent() {
    assert_eq!(FEATURES.len(), 3);
    for feature in FEATURES {
        assert!(!feature.title.is_empty());
        assert!(!feature.description.is_empty());
        assert!(feature.accent.starts_with("bg-brand-"));
    }
}

#[test]
fn step_numbers_are_two_digit_and_sequential() {
    let numbers: Vec<String> = (0..EXIT_STEPS.len()).map(step_number).collect();
    assert_eq!(numbers, vec!["01", "02", "03"]);
    assert_eq!(step_number(9), "10");
}

#[test]
fn exit_steps_run_friction_survey_response() {
    let titles: Vec<&str> = EXIT_STEPS.iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Friction Screen", "Exit Survey", "Hardass Response"]);
    assert!(EXIT_STEPS.iter().all(|s| !s.description.is_empty()));
}

// =============================================================
// Ranks
// =============================================================

#[test]
fn rank_ranges_are_contiguous_from_zero() {
    assert_eq!(RANKS[0].min_sessions, 0);
    for pair in RANKS.windows(2) {
        let upper = pair[0].max_sessions.expect("only the last rank is open-ended");
        assert_eq!(pair[1].min_sessions, upper + 1);
    }
    assert!(RANKS.last().unwrap().max_sessions.is_none());
}

#[test]
fn rank_range_labels_match_marketing_copy() {
    let labels: Vec<String> = RANKS.iter().map(Rank::range_label).collect();
    assert_eq!(labels, vec!["0-5 Sessions", "6-20 Sessions", "21-50 Sessions", "51+ Sessions"]);
}

#[test]
fn rank_for_sessions_picks_tier_by_boundary() {
    assert_eq!(rank_for_sessions(0).name, "RECRUIT");
    assert_eq!(rank_for_sessions(5).name, "RECRUIT");
    assert_eq!(rank_for_sessions(6).name, "SOLDIER");
    assert_eq!(rank_for_sessions(50).name, "WARRIOR");
    assert_eq!(rank_for_sessions(51).name, "COMMANDER");
    assert_eq!(rank_for_sessions(u32::MAX).name, "COMMANDER");
}

// =============================================================
// Charts
// =============================================================

#[test]
fn peak_window_bars_are_percentages() {
    assert!(PEAK_WINDOW_BARS.iter().all(|h| *h <= 100));
    assert_eq!(bar_height_style(85), "height: 85%");
    assert_eq!(bar_height_style(250), "height: 100%");
}

#[test]
fn selected_timer_mode_is_listed() {
    assert!(TIMER_MODES.contains(&SELECTED_TIMER_MODE));
}
