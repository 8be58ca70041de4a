use serde::{Deserialize, Serialize};

/// A single conversation turn in a chat-completion exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The completion endpoint's reply envelope.
///
/// Only the fields the pipeline consumes are modeled; anything else in the
/// provider's reply is ignored. The generated text must be reachable at
/// `choices[0].message.content`; a reply without that shape is a decode
/// failure, never a field-access crash.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
    pub finish_reason: Option<String>,
}
