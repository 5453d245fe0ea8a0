use serde::Serialize;

use crate::event::AlarmEvent;

/// Wire body for the chat webhook: `{"text": "..."}`.
#[derive(Clone, Debug, Serialize)]
pub struct OutboundMessage {
    pub text: String,
}

impl OutboundMessage {
    /// Compose the message for one alarm event.
    ///
    /// Recovery gets a short fixed announcement; anything else gets the state,
    /// the reason, and the full original payload in a code block.
    pub fn for_event(event: &AlarmEvent) -> Self {
        let text = if event.is_recovered() {
            format!(":white_check_mark: {} has recovered", event.alarm_name)
        } else {
            format!(
                ":thinking_face: {} state is now {}: {}\n```\n{:#}```",
                event.alarm_name, event.new_state, event.reason, event.payload
            )
        };

        Self { text }
    }
}
