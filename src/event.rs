use serde::Deserialize;
use serde_json::Value;

use crate::error::{NotifyError, Result};

/// One trigger invocation: an ordered batch of notification records.
#[derive(Clone, Debug, Deserialize)]
pub struct AlarmBatch {
    #[serde(rename = "Records")]
    pub records: Vec<AlarmRecord>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AlarmRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsEnvelope,
}

/// The nested envelope carrying the alarm payload as a JSON-encoded string.
#[derive(Clone, Debug, Deserialize)]
pub struct SnsEnvelope {
    #[serde(rename = "Message")]
    pub message: String,
}

/// One parsed alarm notification.
///
/// `payload` keeps the full original message, extra keys included, for the
/// state-change dump.
#[derive(Clone, Debug)]
pub struct AlarmEvent {
    pub alarm_name: String,
    pub new_state: String,
    pub reason: String,
    pub payload: Value,
}

impl AlarmEvent {
    /// Parse the envelope's JSON string and pull out the required fields.
    pub fn parse(record: &AlarmRecord) -> Result<Self> {
        let payload: Value = serde_json::from_str(&record.sns.message)?;

        let alarm_name = required_str(&payload, "AlarmName")?;
        let new_state = required_str(&payload, "NewStateValue")?;
        let reason = required_str(&payload, "NewStateReason")?;

        Ok(Self { alarm_name, new_state, reason, payload })
    }

    /// "OK" in any casing means the alarm has cleared.
    pub fn is_recovered(&self) -> bool {
        self.new_state.eq_ignore_ascii_case("ok")
    }
}

fn required_str(payload: &Value, key: &'static str) -> Result<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(NotifyError::MissingField(key))
}
