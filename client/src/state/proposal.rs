#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

/// Smallest the "No" button shrinks to, however often it is clicked.
pub const MIN_NO_SCALE: f64 = 0.3;
const NO_SHRINK_PER_DECLINE: f64 = 0.15;
const YES_GROWTH_PER_DECLINE: f64 = 0.1;

/// Where the proposal stands. `Accepted` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Asking,
    Accepted,
}

/// Decline counter and accept flag for one page visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProposalState {
    decline_count: u32,
    phase: Phase,
}

impl ProposalState {
    #[must_use]
    pub fn decline_count(&self) -> u32 {
        self.decline_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.phase == Phase::Accepted
    }

    /// Count one more "No". Ignored once accepted.
    pub fn decline(&mut self) -> bool {
        if self.is_accepted() {
            return false;
        }
        self.decline_count = self.decline_count.saturating_add(1);
        true
    }

    /// Move to `Accepted`. Returns `true` only on the transition itself.
    pub fn accept(&mut self) -> bool {
        if self.is_accepted() {
            return false;
        }
        self.phase = Phase::Accepted;
        true
    }

    /// Scale of the "No" button: shrinks with every decline down to a floor.
    #[must_use]
    pub fn no_button_scale(&self) -> f64 {
        (1.0 - f64::from(self.decline_count) * NO_SHRINK_PER_DECLINE).max(MIN_NO_SCALE)
    }

    /// Scale of the "Yes" button: grows with every decline.
    #[must_use]
    pub fn yes_button_scale(&self) -> f64 {
        1.0 + f64::from(self.decline_count) * YES_GROWTH_PER_DECLINE
    }

    /// The nudge toward "Yes" is shown after the first decline.
    #[must_use]
    pub fn shows_hint(&self) -> bool {
        self.decline_count > 0
    }
}
