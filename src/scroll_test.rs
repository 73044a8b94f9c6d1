#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Nav shadow
// =============================================================

#[test]
fn shadow_threshold_is_exclusive() {
    assert!(!nav_shadow(0.0));
    assert!(!nav_shadow(50.0));
    assert!(nav_shadow(50.5));
    assert!(nav_shadow(51.0));
}

#[test]
fn shadow_depends_only_on_current_offset() {
    // Scrolling down then back up lands on the same answer as a fresh read.
    let path = [0.0, 20.0, 49.0, 80.0, 300.0, 60.0, 50.0, 10.0, 51.0, 0.0];
    for y in path {
        assert_eq!(ScrollFrame::at(y).shadow, y > 50.0, "scroll_y = {y}");
    }
}

// =============================================================
// Hero parallax
// =============================================================

#[test]
fn hero_moves_at_half_scroll_speed() {
    assert_eq!(hero_offset(0.0), 0.0);
    assert_eq!(hero_offset(100.0), 50.0);
    assert_eq!(hero_offset(333.0), 166.5);
}

#[test]
fn frame_formats_hero_transform() {
    assert_eq!(ScrollFrame::at(0.0).hero_transform, "translateY(0px)");
    assert_eq!(ScrollFrame::at(120.0).hero_transform, "translateY(60px)");
    assert_eq!(ScrollFrame::at(25.0).hero_transform, "translateY(12.5px)");
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_leaves_room_for_nav() {
    assert_eq!(anchor_scroll_top(1000.0), 920.0);
    assert_eq!(anchor_scroll_top(40.0), -40.0);
}

// =============================================================
// Pricing CTA
// =============================================================

#[test]
fn pricing_reach_uses_viewport_bottom() {
    assert!(!pricing_in_reach(0.0, 800.0, 800.0));
    assert!(pricing_in_reach(1.0, 800.0, 800.0));
    assert!(pricing_in_reach(2000.0, 800.0, 800.0));
}

#[test]
fn cta_switches_to_choose_plan_in_reach() {
    assert_eq!(cta_relabel("Get Started", true), Some(CtaLabel::ChoosePlan));
    assert_eq!(cta_relabel("Start Free Today", true), Some(CtaLabel::ChoosePlan));
    assert_eq!(cta_relabel("Learn more", true), None);
}

#[test]
fn cta_reverts_out_of_reach() {
    assert_eq!(cta_relabel("rocket_launch Choose Plan", false), Some(CtaLabel::StartFree));
    assert_eq!(cta_relabel("Start Free Today", false), None);
}

#[test]
fn relabel_is_stable_once_applied() {
    // After switching, the new text does not trigger another switch in the same direction.
    assert_eq!(cta_relabel("rocket_launch Choose Plan", true), None);
    assert_eq!(cta_relabel(START_FREE_TEXT, false), None);
}
