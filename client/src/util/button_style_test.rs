use super::*;

fn declined(times: u32) -> ProposalState {
    let mut state = ProposalState::default();
    for _ in 0..times {
        state.decline();
    }
    state
}

#[test]
fn no_button_has_no_style_before_first_decline() {
    assert_eq!(no_button_style(&declined(0), (12.0, -7.5)), "");
}

#[test]
fn no_button_is_displaced_and_shrunk() {
    assert_eq!(
        no_button_style(&declined(10), (12.0, -7.5)),
        "transform: translate(12.0px, -7.5px) scale(0.30); transition: all 0.3s ease;"
    );
}

#[test]
fn yes_button_scale_is_rendered() {
    assert_eq!(yes_button_style(&declined(0)), "transform: scale(1.00); transition: all 0.3s ease;");
    assert_eq!(yes_button_style(&declined(5)), "transform: scale(1.50); transition: all 0.3s ease;");
}

#[test]
fn jitter_stays_within_bounds() {
    for _ in 0..32 {
        let (dx, dy) = random_jitter();
        assert!((-MAX_JITTER_PX..MAX_JITTER_PX).contains(&dx));
        assert!((-MAX_JITTER_PX..MAX_JITTER_PX).contains(&dy));
    }
}
