//! Module `state`
//!
//! Tracks the submit control of a login form through a single submission.

/// State of the submit control
///
/// `Idle -> Validating -> {Idle, Submitting -> Idle}`. There is no logged-in
/// state: every click is a self-contained simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
}

impl SubmitState {
    /// Whether the control accepts clicks
    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitState::Idle)
    }

    /// Label shown while busy; `None` means the control's own label
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            SubmitState::Idle => None,
            SubmitState::Validating | SubmitState::Submitting => Some("Validando..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_is_enabled() {
        assert!(SubmitState::Idle.is_enabled());
        assert!(!SubmitState::Validating.is_enabled());
        assert!(!SubmitState::Submitting.is_enabled());
    }

    #[test]
    fn test_busy_label() {
        assert_eq!(SubmitState::default().busy_label(), None);
        assert_eq!(SubmitState::Validating.busy_label(), Some("Validando..."));
    }
}
