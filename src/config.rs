use std::env;

/// Environment name substituted into alarm-name templates when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "Staging";

// -------------------------------------------------------
// Config Struct
// -------------------------------------------------------
#[derive(Clone, Debug)]
pub struct NotifierConfig {
    /// Deployment environment name (e.g. "Staging", "Prod")
    pub environment: String,

    /// Chat webhook URL for delivery; `None` disables all delivery
    pub webhook_url: Option<String>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            webhook_url: None,
        }
    }
}

impl NotifierConfig {
    /// Read configuration once at process start.
    ///
    /// A blank `SLACK_BOT_WEBHOOK` counts as unset.
    pub fn from_env() -> Self {
        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        let webhook_url = env::var("SLACK_BOT_WEBHOOK")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self { environment, webhook_url }
    }

    pub fn delivery_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }
}

// -------------------------------------------------------
// INITIATE (TRACING SETUP)
// -------------------------------------------------------
pub fn initiate() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // RUST_LOG + alarmhook fallback filter
    let filter = EnvFilter::from_default_env()
        .add_directive("alarmhook=info".parse().unwrap_or_else(|_| "info".parse().unwrap()))
        .add_directive("alarmhook::webhook=info".parse().unwrap_or_else(|_| "info".parse().unwrap()));

    let fmt_layer = fmt::layer().with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
