use super::*;

fn seen(ratio: f64) -> Observation {
    Observation { intersecting: true, ratio, coverage: 0.0 }
}

fn hidden() -> Observation {
    Observation { intersecting: false, ratio: 0.0, coverage: 0.0 }
}

#[test]
fn starts_hidden() {
    let state = RevealState::new(0.3);
    assert!(!state.revealed());
}

#[test]
fn below_threshold_stays_hidden() {
    let mut state = RevealState::new(0.3);
    assert_eq!(state.observe(seen(0.1)), RevealTransition::Unchanged);
    assert!(!state.revealed());
}

#[test]
fn reaching_threshold_reveals_once() {
    let mut state = RevealState::new(0.3);
    assert_eq!(state.observe(seen(0.3)), RevealTransition::Revealed);
    assert!(state.revealed());
    assert_eq!(state.observe(seen(0.9)), RevealTransition::Unchanged);
}

#[test]
fn rounding_just_below_threshold_still_reveals() {
    let mut state = RevealState::new(0.3);
    assert_eq!(state.observe(seen(0.2995)), RevealTransition::Revealed);
}

#[test]
fn not_intersecting_never_reveals() {
    let mut state = RevealState::new(0.0);
    assert_eq!(state.observe(hidden()), RevealTransition::Unchanged);
    assert!(!state.revealed());
}

#[test]
fn revealed_never_reverts_for_any_sequence() {
    let sequence = [
        seen(0.0),
        seen(0.5),
        hidden(),
        seen(0.05),
        seen(1.0),
        hidden(),
    ];
    let mut state = RevealState::new(0.3);
    let mut transitions = 0;
    let mut was_revealed = false;
    for obs in sequence {
        if state.observe(obs) == RevealTransition::Revealed {
            transitions += 1;
        }
        assert!(!was_revealed || state.revealed());
        was_revealed = state.revealed();
    }
    assert_eq!(transitions, 1);
    assert!(state.revealed());
}

#[test]
fn reveal_now_is_one_shot() {
    let mut state = RevealState::new(0.3);
    assert_eq!(state.reveal_now(), RevealTransition::Revealed);
    assert_eq!(state.reveal_now(), RevealTransition::Unchanged);
    assert_eq!(state.observe(seen(1.0)), RevealTransition::Unchanged);
}

#[test]
fn threshold_is_clamped_to_unit_range() {
    assert_eq!(RevealState::new(-1.0).threshold(), 0.0);
    assert_eq!(RevealState::new(2.0).threshold(), 1.0);
}

#[test]
fn section_thresholds() {
    assert_eq!(section_threshold(SectionId::About), 0.2);
    assert_eq!(section_threshold(SectionId::Vision), 0.3);
    assert_eq!(section_threshold(SectionId::Contact), 0.3);
    assert_eq!(RevealState::for_section(SectionId::About).threshold(), 0.2);
}

#[test]
fn reveal_class_appends_modifier() {
    assert_eq!(reveal_class("about__grid", false), "about__grid reveal");
    assert_eq!(reveal_class("about__grid", true), "about__grid reveal reveal--visible");
}

#[test]
fn stagger_style_steps_per_index() {
    assert_eq!(stagger_style(200, 100, 0), "transition-delay:200ms");
    assert_eq!(stagger_style(200, 100, 3), "transition-delay:500ms");
}

#[test]
fn tall_section_reveals_once_it_fills_the_viewport() {
    // Section five viewports tall: the visible ratio tops out at 0.2.
    let mut state = RevealState::new(0.3);
    let partly = Observation { intersecting: true, ratio: 0.04, coverage: 0.2 };
    assert_eq!(state.observe(partly), RevealTransition::Unchanged);

    let full = Observation { intersecting: true, ratio: 0.2, coverage: 1.0 };
    assert_eq!(state.observe(full), RevealTransition::Revealed);
    assert!(state.revealed());
}

#[test]
fn coverage_without_intersection_does_not_reveal() {
    let mut state = RevealState::new(0.3);
    let obs = Observation { intersecting: false, ratio: 0.0, coverage: 1.0 };
    assert_eq!(state.observe(obs), RevealTransition::Unchanged);
}

#[test]
fn observer_thresholds_step_up_to_section_threshold() {
    let steps = observer_thresholds(0.1);
    assert_eq!(steps.len(), 6);
    assert_eq!(steps.first(), Some(&0.0));
    assert_eq!(steps.last(), Some(&0.1));
    assert!(steps.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn observer_thresholds_for_zero_is_single_entry() {
    assert_eq!(observer_thresholds(0.0), vec![0.0]);
}
