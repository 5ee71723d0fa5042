use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title reported for conversations that carry none
pub const UNTITLED: &str = "Untitled";

/// Top-level export document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default)]
    pub conversations: Vec<ConversationRecord>,
}

impl ExportDocument {
    /// Titles of the first `limit` conversations, in document order
    pub fn titles(&self, limit: usize) -> Vec<String> {
        self.conversations.iter().take(limit).map(|c| c.title().to_string()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(default)]
    pub conversation: ConversationMeta,
    /// Raw `{ "response": {...} }` entries, validated one at a time
    #[serde(default)]
    pub responses: Vec<Value>,
}

impl ConversationRecord {
    pub fn title(&self) -> &str {
        self.conversation.title.as_deref().unwrap_or(UNTITLED)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationMeta {
    #[serde(default)]
    pub title: Option<String>,
}
