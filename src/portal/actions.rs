//! Secondary page actions
//!
//! Guardian registration, seat requests and password recovery. None of them
//! talk to a backend; they only validate input and report.

use log::info;
use std::sync::Arc;

use super::core::Portal;
use super::flow::{ActionFlow, ActionResult};
use crate::client::LoginForm;
use crate::error::PortalError;
use crate::notify::NotificationKind;

impl Portal {
    /// Accept a guardian registration code of at least the configured length.
    pub fn register_guardian(&self, form: &dyn LoginForm) -> ActionFlow {
        let code = form.registration_code().unwrap_or_default();
        let code = code.trim();

        if code.is_empty() {
            return self.reject(PortalError::MissingCode);
        }

        let min = self.config.min_registration_code_length;
        if code.chars().count() < min {
            return self.reject(PortalError::CodeTooShort(min));
        }

        info!("Guardian registration accepted");
        self.notify(
            NotificationKind::Success,
            format!(
                "Registro exitoso con código: {}. Procediendo a completar datos...",
                code
            ),
        );
        form.clear_registration_code();

        ActionFlow::new(Ok(ActionResult::Registered(code.to_string())), Vec::new())
    }

    pub fn request_seat(&self) -> ActionFlow {
        self.notify(
            NotificationKind::Success,
            "Solicitud de cupo enviada. Será contactado próximamente.",
        );
        let redirect = self.notify_later(
            self.config.seat_redirect_delay(),
            NotificationKind::Info,
            "Redirigiendo al formulario de solicitud de cupo...",
        );

        ActionFlow::new(Ok(ActionResult::SeatRequested), vec![redirect])
    }

    /// Announce the recovery page, then navigate to it after a delay.
    pub fn recover_password(&self) -> ActionFlow {
        self.notify(
            NotificationKind::Info,
            "Redirigiendo al formulario de recuperación de contraseña...",
        );

        let navigator = Arc::clone(&self.navigator);
        let target = self.config.recovery_target.clone();
        let redirect = self.after(self.config.recovery_redirect_delay(), async move {
            navigator.navigate(&target);
        });

        ActionFlow::new(Ok(ActionResult::RecoveryStarted), vec![redirect])
    }
}
