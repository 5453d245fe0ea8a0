use thiserror::Error;

/// Errors that abort a batch. Nothing here is retried at this layer.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The nested notification message was not valid JSON.
    #[error("malformed alarm payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A required key was absent (or not a string) in the parsed payload.
    #[error("alarm payload missing required field `{0}`")]
    MissingField(&'static str),

    /// The webhook request could not be sent.
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("webhook rejected message with status {status}")]
    Delivery {
        status: u16,
        /// Raw response body, already logged for operator visibility.
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let err = NotifyError::MissingField("AlarmName");
        assert_eq!(err.to_string(), "alarm payload missing required field `AlarmName`");
    }

    #[test]
    fn display_delivery() {
        let err = NotifyError::Delivery {
            status: 404,
            body: "no_service".to_string(),
        };
        assert_eq!(err.to_string(), "webhook rejected message with status 404");
    }

    #[test]
    fn malformed_payload_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{nope");
        let err: NotifyError = parse.unwrap_err().into();
        assert!(matches!(err, NotifyError::MalformedPayload(_)));
    }
}
