use std::collections::HashMap;

use super::*;
use crate::util::layout::Rect;

/// Zero-width box spanning `[top, top + height)`.
fn span(top: f64, height: f64) -> Rect {
    Rect::new(0.0, top, 0.0, height)
}

fn three_sections() -> HashMap<SectionId, Rect> {
    HashMap::from([
        (SectionId::Home, span(0.0, 100.0)),
        (SectionId::About, span(100.0, 200.0)),
        (SectionId::Vision, span(300.0, 300.0)),
    ])
}

// =============================================================
// is_scrolled
// =============================================================

#[test]
fn is_scrolled_is_strictly_greater_than_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert!(is_scrolled(1000.0));
}

#[test]
fn on_scroll_tracks_is_scrolled() {
    let layout = three_sections();
    let mut state = ScrollState::default();
    for y in [0.0, 10.0, 50.0, 51.0, 400.0, 20.0] {
        state.on_scroll(y, &layout);
        assert_eq!(state.is_scrolled, y > 50.0);
        assert_eq!(state.offset, y);
    }
}

// =============================================================
// Active section step function
// =============================================================

#[test]
fn default_state_highlights_home() {
    let state = ScrollState::default();
    assert_eq!(state.active, Some(SectionId::Home));
    assert!(!state.is_scrolled);
}

#[test]
fn probe_maps_offsets_to_sections() {
    let layout = three_sections();
    let mut state = ScrollState::default();

    state.on_scroll(0.0, &layout);
    assert_eq!(state.active, Some(SectionId::About));

    state.on_scroll(-100.0, &layout);
    assert_eq!(state.active, Some(SectionId::Home));

    state.on_scroll(50.0, &layout);
    assert_eq!(state.active, Some(SectionId::About));

    state.on_scroll(250.0, &layout);
    assert_eq!(state.active, Some(SectionId::Vision));
}

#[test]
fn section_at_uses_half_open_bounds() {
    let layout = HashMap::from([
        (SectionId::Home, span(0.0, 100.0)),
        (SectionId::About, span(100.0, 200.0)),
        (SectionId::Vision, span(300.0, 300.0)),
    ]);
    let order = [SectionId::Home, SectionId::About, SectionId::Vision];
    assert_eq!(section_at(probe_offset(-100.0), &order, &layout), Some(SectionId::Home));
    assert_eq!(section_at(0.0, &order, &layout), Some(SectionId::Home));
    assert_eq!(section_at(probe_offset(50.0), &order, &layout), Some(SectionId::About));
    assert_eq!(section_at(probe_offset(250.0), &order, &layout), Some(SectionId::Vision));
    assert_eq!(section_at(probe_offset(1000.0), &order, &layout), None);
}

#[test]
fn past_last_section_keeps_previous_active() {
    let layout = three_sections();
    let mut state = ScrollState::default();
    state.on_scroll(250.0, &layout);
    assert_eq!(state.active, Some(SectionId::Vision));

    state.on_scroll(1000.0, &layout);
    assert_eq!(state.active, Some(SectionId::Vision));
    assert!(state.is_scrolled);
}

#[test]
fn first_match_in_page_order_wins_on_overlap() {
    let layout = HashMap::from([
        (SectionId::Home, span(0.0, 500.0)),
        (SectionId::About, span(100.0, 200.0)),
    ]);
    assert_eq!(section_at(150.0, &SectionId::ALL, &layout), Some(SectionId::Home));
}

#[test]
fn missing_sections_are_skipped() {
    let layout = HashMap::from([(SectionId::Contact, span(0.0, 1000.0))]);
    let mut state = ScrollState::default();
    state.on_scroll(0.0, &layout);
    assert_eq!(state.active, Some(SectionId::Contact));
}

#[test]
fn empty_layout_never_changes_active() {
    let layout: HashMap<SectionId, Rect> = HashMap::new();
    let mut state = ScrollState::default();
    state.on_scroll(300.0, &layout);
    assert_eq!(state.active, Some(SectionId::Home));
}

#[test]
fn on_scroll_is_idempotent() {
    let layout = three_sections();
    let mut once = ScrollState::default();
    once.on_scroll(120.0, &layout);
    let mut twice = once;
    twice.on_scroll(120.0, &layout);
    assert_eq!(once, twice);
}

// =============================================================
// Navigation click
// =============================================================

#[test]
fn select_sets_active_until_next_scroll() {
    let layout = three_sections();
    let mut state = ScrollState::default();
    state.on_scroll(0.0, &layout);

    state.select(SectionId::Vision);
    assert!(state.is_active(SectionId::Vision));
    assert!(!state.is_active(SectionId::About));

    state.on_scroll(0.0, &layout);
    assert_eq!(state.active, Some(SectionId::About));
}

#[test]
fn select_survives_out_of_bounds_scroll() {
    let layout = three_sections();
    let mut state = ScrollState::default();
    state.select(SectionId::Vision);
    state.on_scroll(5000.0, &layout);
    assert_eq!(state.active, Some(SectionId::Vision));
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_scales_offset() {
    let layout = three_sections();
    let mut state = ScrollState::default();
    state.on_scroll(200.0, &layout);
    assert!((state.parallax_offset() - 80.0).abs() < f64::EPSILON);
}
