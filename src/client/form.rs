//! Login form collaborator
//!
//! The orchestrator never reads page state directly: it asks a [`LoginForm`]
//! for a snapshot of the fields and tells it when to reset or change the
//! submit control.

use super::controls::LOGIN_LABEL;
use super::state::SubmitState;
use crate::auth::{LoginAttempt, UNSELECTED_PERIOD};
use log::debug;
use std::sync::Mutex;

/// Field values at the moment of submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub username: String,
    pub password: String,
    /// Present only on forms that have a period selector
    pub period: Option<String>,
}

impl FormSnapshot {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            period: None,
        }
    }

    pub fn with_period(mut self, period: &str) -> Self {
        self.period = Some(period.to_string());
        self
    }

    /// Sample values pre-filled for trying the portal out
    pub fn demo() -> Self {
        Self::new("juan.perez@example.com", "123456").with_period("2425")
    }

    /// The attempt this snapshot represents; the username is trimmed, the
    /// password is taken verbatim.
    pub fn to_attempt(&self) -> LoginAttempt {
        let attempt = LoginAttempt::new(self.username.trim(), &self.password);
        match &self.period {
            Some(period) => attempt.with_period(period),
            None => attempt,
        }
    }

    /// Values after a form reset
    pub fn cleared(&self) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            period: self.period.as_ref().map(|_| UNSELECTED_PERIOD.to_string()),
        }
    }
}

/// A login form on the current page
pub trait LoginForm: Send + Sync {
    /// Current field values; `None` if the form lacks its username or
    /// password input.
    fn snapshot(&self) -> Option<FormSnapshot>;

    /// Clear every field, putting the period selector back on its placeholder.
    fn reset(&self);

    /// Overwrite the field values.
    fn fill(&self, fields: FormSnapshot);

    fn set_submit_state(&self, state: SubmitState);

    /// Guardian registration code field, on pages that have one
    fn registration_code(&self) -> Option<String> {
        None
    }

    fn clear_registration_code(&self) {}
}

/// Form held in memory, recording every submit control transition
#[derive(Default)]
pub struct MemoryForm {
    fields: Mutex<Option<FormSnapshot>>,
    registration_code: Mutex<Option<String>>,
    transitions: Mutex<Vec<SubmitState>>,
}

impl MemoryForm {
    pub fn new(fields: FormSnapshot) -> Self {
        Self {
            fields: Mutex::new(Some(fields)),
            ..Self::default()
        }
    }

    /// A guardian registration form holding `code`
    pub fn with_registration_code(code: &str) -> Self {
        Self {
            registration_code: Mutex::new(Some(code.to_string())),
            ..Self::default()
        }
    }

    /// A form without inputs
    pub fn empty() -> Self {
        Self::default()
    }

    /// Submit control transitions, oldest first
    pub fn transitions(&self) -> Vec<SubmitState> {
        self.transitions
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    pub fn submit_state(&self) -> SubmitState {
        self.transitions().last().copied().unwrap_or_default()
    }

    /// Whether the submit control currently accepts clicks
    pub fn is_submit_enabled(&self) -> bool {
        self.submit_state().is_enabled()
    }

    /// Text currently shown on the submit control
    pub fn submit_label(&self) -> &'static str {
        self.submit_state().busy_label().unwrap_or(LOGIN_LABEL)
    }
}

impl LoginForm for MemoryForm {
    fn snapshot(&self) -> Option<FormSnapshot> {
        self.fields.lock().ok()?.clone()
    }

    fn reset(&self) {
        if let Ok(mut current) = self.fields.lock() {
            if let Some(fields) = current.as_mut() {
                *fields = fields.cleared();
            }
        }
    }

    fn fill(&self, fields: FormSnapshot) {
        if let Ok(mut current) = self.fields.lock() {
            *current = Some(fields);
        }
    }

    fn set_submit_state(&self, state: SubmitState) {
        debug!(
            "Submit control {} ({})",
            if state.is_enabled() { "enabled" } else { "disabled" },
            state.busy_label().unwrap_or(LOGIN_LABEL)
        );
        if let Ok(mut transitions) = self.transitions.lock() {
            transitions.push(state);
        }
    }

    fn registration_code(&self) -> Option<String> {
        self.registration_code.lock().ok()?.clone()
    }

    fn clear_registration_code(&self) {
        if let Ok(mut code) = self.registration_code.lock() {
            if code.is_some() {
                *code = Some(String::new());
            }
        }
    }
}
