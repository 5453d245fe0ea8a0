use crate::allowlist::AllowList;
use crate::config::NotifierConfig;
use crate::error::Result;
use crate::event::{AlarmBatch, AlarmEvent};
use crate::message::OutboundMessage;
use crate::webhook::{ChatWebhook, HttpWebhook};

/// Per-batch alarm handler: filter to the allow-list, compose, log, deliver.
///
/// Holds no state across invocations; one instance can serve every batch.
pub struct Notifier<W = HttpWebhook> {
    allow: AllowList,
    webhook: Option<W>,
}

impl Notifier<HttpWebhook> {
    pub fn from_config(cfg: &NotifierConfig) -> Self {
        Self {
            allow: AllowList::for_environment(&cfg.environment),
            webhook: cfg.webhook_url.clone().map(HttpWebhook::new),
        }
    }
}

impl<W: ChatWebhook> Notifier<W> {
    pub fn new(allow: AllowList, webhook: Option<W>) -> Self {
        Self { allow, webhook }
    }

    /// Process one batch in input order.
    ///
    /// Fatal errors (malformed payload, missing field, delivery failure) abort
    /// the remaining records; allow-list misses skip a single record silently.
    pub async fn handle(&self, batch: &AlarmBatch) -> Result<()> {
        // no webhook configured => the whole batch is a silent no-op
        let Some(webhook) = &self.webhook else {
            return Ok(());
        };

        for record in &batch.records {
            let event = AlarmEvent::parse(record)?;

            if !self.allow.contains(&event.alarm_name) {
                continue;
            }

            let message = OutboundMessage::for_event(&event);
            tracing::info!(
                target = "alarmhook",
                alarm_name = %event.alarm_name.to_lowercase(),
                action = "sending message to chat",
                message = %message.text,
            );
            webhook.post(&message).await?;
        }

        Ok(())
    }
}
