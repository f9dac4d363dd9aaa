use log::info;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::client::{ControlAction, FormSnapshot, LoginForm};
use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::error::handlers::{error_to_message, handle_error};
use crate::navigate::{Navigator, PageContext};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::portal::flow::ActionFlow;
use crate::protocol::{LoginBackend, SimulatedBackend};
use crate::store::CredentialStore;

const DEMO_HINT: &str =
    "Para probar el sistema use: Usuario: juan.perez@example.com / Contraseña: 123456";

/// The login portal: routes page actions to their handlers and owns the
/// collaborators they report through.
pub struct Portal {
    pub(crate) config: Arc<PortalConfig>,
    pub(crate) store: CredentialStore,
    pub(crate) backend: Arc<dyn LoginBackend>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) navigator: Arc<dyn Navigator>,
}

impl Portal {
    /// Portal backed by the configured credential source and the simulated
    /// login backend.
    pub fn new(
        config: PortalConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let store = CredentialStore::from_config(&config);
        let backend = Arc::new(SimulatedBackend::new(config.request_latency()));

        Self {
            config: Arc::new(config),
            store,
            backend,
            notifier,
            navigator,
        }
    }

    pub fn with_store(mut self, store: CredentialStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_backend(mut self, backend: Arc<dyn LoginBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Run the handler bound to a page control.
    pub async fn dispatch(
        &self,
        action: ControlAction,
        page: &PageContext,
        form: Arc<dyn LoginForm>,
    ) -> ActionFlow {
        info!("Dispatching {:?} on {}", action, page.path());
        match action {
            ControlAction::Login => self.handle_login(page, form).await,
            ControlAction::RegisterGuardian => self.register_guardian(form.as_ref()),
            ControlAction::RequestSeat => self.request_seat(),
            ControlAction::RecoverPassword => self.recover_password(),
        }
    }

    /// Page-ready hooks: pre-fill an empty login form with demo values and
    /// show the demo credentials hint.
    pub fn on_ready(&self, form: Arc<dyn LoginForm>) -> Vec<JoinHandle<()>> {
        let prefill = self.after(self.config.prefill_delay(), async move {
            let Some(current) = form.snapshot() else {
                return;
            };
            if !current.username.is_empty() {
                return;
            }

            let mut demo = FormSnapshot::demo();
            if current.period.is_none() {
                demo.period = None;
            }
            form.fill(demo);
        });

        let hint = self.notify_later(self.config.hint_delay(), NotificationKind::Info, DEMO_HINT);
        vec![prefill, hint]
    }

    pub(crate) fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.notifier.notify(Notification::new(
            kind,
            message,
            self.config.notification_timeout(),
        ));
    }

    /// Log the error and show its user-visible message.
    pub(crate) fn report(&self, err: &PortalError) {
        handle_error(err);
        self.notify(NotificationKind::Error, error_to_message(err));
    }

    /// Fail an action that left no timers behind.
    pub(crate) fn reject(&self, err: PortalError) -> ActionFlow {
        self.report(&err);
        ActionFlow::new(Err(err), Vec::new())
    }

    /// Spawn `task` to run once `delay` has elapsed from now. Never cancelled.
    pub(crate) fn after<F>(&self, delay: Duration, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        })
    }

    pub(crate) fn notify_later(
        &self,
        delay: Duration,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> JoinHandle<()> {
        let notifier = Arc::clone(&self.notifier);
        let notification = Notification::new(kind, message, self.config.notification_timeout());
        self.after(delay, async move {
            notifier.notify(notification);
        })
    }
}
