use super::*;

// =============================================================
// ProposalState defaults
// =============================================================

#[test]
fn proposal_starts_asking_with_no_declines() {
    let state = ProposalState::default();
    assert_eq!(state.phase(), Phase::Asking);
    assert_eq!(state.decline_count(), 0);
    assert!(!state.is_accepted());
    assert!(!state.shows_hint());
}

// =============================================================
// Decline
// =============================================================

#[test]
fn decline_increments_by_one_each_time() {
    let mut state = ProposalState::default();
    for expected in 1..=12 {
        assert!(state.decline());
        assert_eq!(state.decline_count(), expected);
        assert_eq!(state.phase(), Phase::Asking);
    }
    assert!(state.shows_hint());
}

#[test]
fn decline_after_accept_is_ignored() {
    let mut state = ProposalState::default();
    state.decline();
    state.accept();
    assert!(!state.decline());
    assert_eq!(state.decline_count(), 1);
}

// =============================================================
// Accept
// =============================================================

#[test]
fn accept_transitions_once() {
    let mut state = ProposalState::default();
    assert!(state.accept());
    assert_eq!(state.phase(), Phase::Accepted);
    assert!(!state.accept());
    assert_eq!(state.phase(), Phase::Accepted);
}

#[test]
fn accept_keeps_decline_count() {
    let mut state = ProposalState::default();
    state.decline();
    state.decline();
    state.accept();
    assert!(state.is_accepted());
    assert_eq!(state.decline_count(), 2);
}

// =============================================================
// Button scaling
// =============================================================

#[test]
fn no_button_shrinks_to_floor() {
    let mut state = ProposalState::default();
    assert!((state.no_button_scale() - 1.0).abs() < 1e-9);
    state.decline();
    assert!((state.no_button_scale() - 0.85).abs() < 1e-9);
    for _ in 0..20 {
        state.decline();
    }
    assert!((state.no_button_scale() - MIN_NO_SCALE).abs() < 1e-9);
}

#[test]
fn yes_button_grows_with_declines() {
    let mut state = ProposalState::default();
    assert!((state.yes_button_scale() - 1.0).abs() < 1e-9);
    for _ in 0..5 {
        state.decline();
    }
    assert!((state.yes_button_scale() - 1.5).abs() < 1e-9);
}

// =============================================================
// Decline labels
// =============================================================

#[test]
fn fifth_decline_past_a_four_entry_table_uses_overflow_label() {
    let labels = crate::content::DeclineLabels {
        labels: ["No", "Are you sure?", "Really?", "Think again...", "Please?"].map(str::to_owned).to_vec(),
        overflow: "Pretty please".to_owned(),
    };
    let mut state = ProposalState::default();
    let mut seen = Vec::new();
    for _ in 0..5 {
        state.decline();
        seen.push(labels.label_for(state.decline_count()).to_owned());
    }
    assert_eq!(seen, ["Are you sure?", "Really?", "Think again...", "Please?", "Pretty please"]);
}
