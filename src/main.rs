//! SAE login simulator - Entry Point
//!
//! Runs a single page action against the simulated portal, reporting every
//! notification through the log.

use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

use sae_login::client::{ControlAction, FormSnapshot, LoginForm, MemoryForm};
use sae_login::navigate::{LogNavigator, PageContext};
use sae_login::notify::LogNotifier;
use sae_login::utils::logging::setup_logging;
use sae_login::{Portal, PortalConfig};

#[derive(Parser, Debug)]
#[command(name = "sae-login", about = "Simulate the SAE portal login page")]
struct Args {
    /// Configuration file stem; `config` in the working directory by default
    #[arg(long)]
    config: Option<String>,

    /// Path of the page the action happens on
    #[arg(long, default_value = "/html/plantel.html")]
    page: String,

    /// Label of the clicked control
    #[arg(long, default_value = "Iniciar Sesión")]
    label: String,

    /// Link target of the clicked control, if it is a link
    #[arg(long)]
    href: Option<String>,

    /// Username; demo values are pre-filled when omitted
    #[arg(long, env = "SAE_LOGIN_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "SAE_LOGIN_PASSWORD", default_value = "")]
    password: String,

    #[arg(long)]
    period: Option<String>,

    /// Guardian registration code
    #[arg(long)]
    code: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => PortalConfig::load_from(path),
        None => PortalConfig::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(action) = ControlAction::classify(&args.label, args.href.as_deref()) else {
        error!("No portal action is bound to control {:?}", args.label);
        return ExitCode::FAILURE;
    };

    let page = PageContext::new(&args.page);
    let portal = Portal::new(config, Arc::new(LogNotifier), Arc::new(LogNavigator));
    let form = build_form(&args, &page);
    info!(
        "Credential source {} (request latency {}ms)",
        portal.config().users_url,
        portal.config().request_latency_ms
    );

    for hook in portal.on_ready(Arc::clone(&form)) {
        if let Err(e) = hook.await {
            error!("Page-ready hook failed: {}", e);
        }
    }

    info!("Simulating {:?} on {}", action, page.path());
    match portal.dispatch(action, &page, form).await.settle().await {
        Ok(result) => {
            info!("Action completed: {:?}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!("Action rejected: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_form(args: &Args, page: &PageContext) -> Arc<dyn LoginForm> {
    if let Some(code) = &args.code {
        return Arc::new(MemoryForm::with_registration_code(code));
    }

    let mut fields = FormSnapshot::new(args.username.as_deref().unwrap_or_default(), &args.password);
    fields.period = match &args.period {
        Some(period) => Some(period.clone()),
        None if page.is_facility() => Some(sae_login::auth::UNSELECTED_PERIOD.to_string()),
        None => None,
    };
    Arc::new(MemoryForm::new(fields))
}
