//! Login submission handler
//!
//! Drives one click of the login button: validate the form, check the
//! credentials, check the period on facility pages, send the simulated
//! request and report back. Whatever happens, the submit control is
//! re-enabled after a trailing delay.

use log::{debug, info};
use std::sync::Arc;

use super::core::Portal;
use super::flow::{ActionFlow, ActionResult};
use crate::auth::{LoginAttempt, authenticate, validate_period};
use crate::client::{LoginForm, SubmitState};
use crate::error::{AuthError, PortalError};
use crate::navigate::PageContext;
use crate::notify::{Notification, NotificationKind};
use crate::protocol::LoginPayload;
use tokio::task::JoinHandle;

impl Portal {
    pub async fn handle_login(&self, page: &PageContext, form: Arc<dyn LoginForm>) -> ActionFlow {
        let Some(snapshot) = form.snapshot() else {
            return self.reject(PortalError::InvalidForm);
        };

        let attempt = snapshot.to_attempt();
        if attempt.handle.is_empty() {
            return self.reject(AuthError::MissingField("usuario".into()).into());
        }
        if attempt.secret.is_empty() {
            return self.reject(AuthError::MissingField("contraseña".into()).into());
        }

        form.set_submit_state(SubmitState::Validating);

        let mut timers = Vec::new();
        let outcome = self.run_login(page, &attempt, &form, &mut timers).await;
        if let Err(e) = &outcome {
            self.report(e);
        }

        timers.push(self.restore_control_later(Arc::clone(&form)));
        ActionFlow::new(outcome, timers)
    }

    async fn run_login(
        &self,
        page: &PageContext,
        attempt: &LoginAttempt,
        form: &Arc<dyn LoginForm>,
        timers: &mut Vec<JoinHandle<()>>,
    ) -> Result<ActionResult, PortalError> {
        let user = match authenticate(&self.store, &attempt.handle, &attempt.secret)
            .await
            .into_result()
        {
            Ok(user) => user,
            Err(e) => {
                form.set_submit_state(SubmitState::Idle);
                return Err(e.into());
            }
        };

        let period = if page.is_facility() {
            match validate_period(attempt.period.as_deref().unwrap_or_default()) {
                Ok(period) => Some(period),
                Err(e) => {
                    form.set_submit_state(SubmitState::Idle);
                    return Err(e.into());
                }
            }
        } else {
            None
        };

        form.set_submit_state(SubmitState::Submitting);

        let category = page.category();
        let payload = LoginPayload {
            username: attempt.handle.clone(),
            category,
            period,
        };
        debug!("Submitting login payload {:?}", payload);

        let response = self.backend.submit(payload).await?;
        if !response.success {
            // Nothing to report: the trailing restore re-enables the control
            info!("Login request for {} was declined", user.handle);
            return Ok(ActionResult::Declined(response));
        }

        info!("Login succeeded for {} ({})", user.handle, category);
        self.notify(
            NotificationKind::Success,
            format!("¡Bienvenido {}! Inicio de sesión exitoso.", user.display_name),
        );

        let notifier = Arc::clone(&self.notifier);
        let notice = Notification::new(
            NotificationKind::Info,
            format!("Redirigiendo al dashboard de {}...", category),
            self.config.notification_timeout(),
        );
        let form = Arc::clone(form);
        timers.push(self.after(self.config.redirect_delay(), async move {
            notifier.notify(notice);
            form.reset();
        }));

        Ok(ActionResult::LoggedIn { user, response })
    }

    fn restore_control_later(&self, form: Arc<dyn LoginForm>) -> JoinHandle<()> {
        self.after(self.config.control_restore_delay(), async move {
            form.set_submit_state(SubmitState::Idle);
        })
    }
}
