use once_cell::sync::OnceCell;
use reqwest::Client;

use crate::error::{NotifyError, Result};
use crate::message::OutboundMessage;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(Client::new)
}

/// Delivery seam for the chat endpoint; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait ChatWebhook {
    async fn post(&self, message: &OutboundMessage) -> Result<()>;
}

/// Posts messages as JSON to a configured webhook URL.
#[derive(Clone, Debug)]
pub struct HttpWebhook {
    url: String,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ChatWebhook for HttpWebhook {
    async fn post(&self, message: &OutboundMessage) -> Result<()> {
        let response = client().post(&self.url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            // surface the raw body before propagating
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                target = "alarmhook::webhook",
                status = status.as_u16(),
                body = %body,
                "webhook rejected message"
            );
            return Err(NotifyError::Delivery { status: status.as_u16(), body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_configured_url() {
        let hook = HttpWebhook::new("https://hooks.example.com/T000/B000");
        assert_eq!(hook.url(), "https://hooks.example.com/T000/B000");
    }
}
