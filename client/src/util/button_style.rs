//! Inline styles for the Yes/No buttons as the decline count grows.

#[cfg(test)]
#[path = "button_style_test.rs"]
mod button_style_test;

use crate::state::proposal::ProposalState;

/// Maximum displacement of the "No" button on each axis, in pixels.
pub const MAX_JITTER_PX: f64 = 50.0;

const TRANSITION: &str = "transition: all 0.3s ease;";

pub fn yes_button_style(state: &ProposalState) -> String {
    format!("transform: scale({:.2}); {TRANSITION}", state.yes_button_scale())
}

/// Style for the "No" button; empty until the first decline.
pub fn no_button_style(state: &ProposalState, (dx, dy): (f64, f64)) -> String {
    if state.decline_count() == 0 {
        return String::new();
    }
    format!(
        "transform: translate({dx:.1}px, {dy:.1}px) scale({:.2}); {TRANSITION}",
        state.no_button_scale()
    )
}

/// Random displacement in `[-MAX_JITTER_PX, MAX_JITTER_PX)` on each axis.
///
/// Server renders never displace the button, so this is zero without
/// `hydrate`.
pub fn random_jitter() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let span = MAX_JITTER_PX * 2.0;
        (js_sys::Math::random() * span - MAX_JITTER_PX, js_sys::Math::random() * span - MAX_JITTER_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}
