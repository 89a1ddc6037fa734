//! Provider-agnostic completion types

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Request with the prompt as the single user message
    pub fn single_user_message(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// Completion result reduced to the candidate message contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Content of each returned choice, in upstream order
    pub choices: Vec<String>,
}

impl CompletionResponse {
    /// Content of the first choice, the only one callers consume
    pub fn first_choice(&self) -> Option<&str> {
        self.choices.first().map(String::as_str)
    }
}
