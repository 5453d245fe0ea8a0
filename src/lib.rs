pub mod allowlist;
pub mod event;
pub mod message;
pub mod notifier;
pub mod webhook;

pub mod config;
pub use config::{NotifierConfig, initiate};

pub mod error;
pub use error::{NotifyError, Result};

pub use allowlist::AllowList;
pub use event::{AlarmBatch, AlarmEvent, AlarmRecord};
pub use message::OutboundMessage;
pub use notifier::Notifier;
pub use webhook::{ChatWebhook, HttpWebhook};
