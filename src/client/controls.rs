//! Page controls
//!
//! Decides which portal action a button or link triggers, by its visible
//! label or its target.

use crate::utils::text::contains_text;

/// Action bound to a page control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Login,
    RegisterGuardian,
    RequestSeat,
    RecoverPassword,
}

pub(crate) const LOGIN_LABEL: &str = "Iniciar Sesión";
const REGISTER_LABEL: &str = "Registrate AQUÍ";
const SEAT_HREF: &str = "cursosc";
const RECOVERY_HREF: &str = "recuperar.php";

impl ControlAction {
    /// Classify a control by its label and optional link target.
    pub fn classify(label: &str, href: Option<&str>) -> Option<Self> {
        if contains_text(label, LOGIN_LABEL) {
            return Some(ControlAction::Login);
        }
        if contains_text(label, REGISTER_LABEL) {
            return Some(ControlAction::RegisterGuardian);
        }

        match href {
            Some(target) if contains_text(target, SEAT_HREF) => Some(ControlAction::RequestSeat),
            Some(target) if contains_text(target, RECOVERY_HREF) => {
                Some(ControlAction::RecoverPassword)
            }
            _ => None,
        }
    }
}
