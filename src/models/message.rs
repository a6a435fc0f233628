use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MessageUsage {
    pub input_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

impl MessageUsage {
    pub fn input(&self) -> u64 {
        self.input_tokens.unwrap_or(0)
    }

    pub fn cache_create(&self) -> u64 {
        self.cache_creation_input_tokens.unwrap_or(0)
    }

    pub fn cache_read(&self) -> u64 {
        self.cache_read_input_tokens.unwrap_or(0)
    }

    pub fn output(&self) -> u64 {
        self.output_tokens.unwrap_or(0)
    }

    /// Tokens currently held in the context window: cache reads plus fresh input.
    pub fn context_tokens(&self) -> u64 {
        self.cache_read().saturating_add(self.input())
    }

    /// True when this snapshot says anything about context occupancy.
    pub fn is_qualifying(&self) -> bool {
        self.input() > 0 || self.cache_read() > 0
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct MessageObj {
    pub model: Option<String>,
    pub usage: Option<MessageUsage>,
}

/// One line of a session transcript (`<session>.jsonl`).
#[derive(Deserialize, Debug, Default, Clone)]
pub struct TranscriptEntry {
    pub timestamp: Option<String>,
    pub message: Option<MessageObj>,
}

impl TranscriptEntry {
    pub fn usage(&self) -> MessageUsage {
        self.message
            .as_ref()
            .and_then(|m| m.usage)
            .unwrap_or_default()
    }

    pub fn model(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.model.as_deref())
    }
}
