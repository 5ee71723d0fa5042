//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// 2024-01-15 10:00:00 UTC in epoch milliseconds
pub const BASE_MILLIS: i64 = 1_705_312_800_000;
pub const MINUTE_MILLIS: i64 = 60_000;
pub const DAY_MILLIS: i64 = 24 * 60 * MINUTE_MILLIS;

/// Builder for export documents
pub struct ExportBuilder {
    conversations: Vec<Value>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self { conversations: Vec::new() }
    }

    /// Add a conversation with the given title and responses
    pub fn with_conversation(mut self, title: &str, responses: &[ResponseBuilder]) -> Self {
        self.conversations.push(json!({
            "conversation": {"title": title},
            "responses": responses.iter().map(ResponseBuilder::to_value).collect::<Vec<_>>(),
        }));
        self
    }

    /// Add a conversation from raw response entries
    pub fn with_raw_conversation(mut self, title: &str, responses: Vec<Value>) -> Self {
        self.conversations.push(json!({
            "conversation": {"title": title},
            "responses": responses,
        }));
        self
    }

    pub fn to_json(&self) -> String {
        json!({ "conversations": self.conversations }).to_string()
    }

    /// Write the document into a fresh temp directory
    pub fn write(&self) -> ExportFile {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("export.json");
        fs::write(&path, self.to_json()).expect("Failed to write export file");
        ExportFile { dir, path }
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An export written to disk; the directory lives as long as this value
pub struct ExportFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ExportFile {
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Builder for a single `{ "response": {...} }` entry
#[derive(Clone)]
pub struct ResponseBuilder {
    id: String,
    millis: i64,
    sender: Option<String>,
    message: Option<String>,
    parent: Option<String>,
    media: Vec<String>,
}

impl ResponseBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            millis: BASE_MILLIS,
            sender: Some("human".to_string()),
            message: Some(format!("message {}", id)),
            parent: None,
            media: Vec::new(),
        }
    }

    /// Set the timestamp as minutes after [`BASE_MILLIS`]
    pub fn minute(mut self, minutes: i64) -> Self {
        self.millis = BASE_MILLIS + minutes * MINUTE_MILLIS;
        self
    }

    pub fn millis(mut self, millis: i64) -> Self {
        self.millis = millis;
        self
    }

    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = Some(sender.to_string());
        self
    }

    pub fn without_sender(mut self) -> Self {
        self.sender = None;
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn audio(mut self) -> Self {
        self.media.push("audio".to_string());
        self
    }

    pub fn to_value(&self) -> Value {
        let mut body = json!({
            "_id": self.id,
            "create_time": {"$date": {"$numberLong": self.millis.to_string()}},
        });
        if let Some(sender) = &self.sender {
            body["sender"] = json!(sender);
        }
        if let Some(message) = &self.message {
            body["message"] = json!(message);
        }
        if let Some(parent) = &self.parent {
            body["parent_response_id"] = json!(parent);
        }
        if !self.media.is_empty() {
            body["media_types"] = json!(self.media);
        }
        json!({ "response": body })
    }
}

/// A small branching conversation:
///
/// ```text
/// q (0) ─┬─ a1 (1) ── q2 (3) ── a3 (4)
///        └─ a2 (2)
/// ```
pub fn branching_responses() -> Vec<ResponseBuilder> {
    vec![
        ResponseBuilder::new("q").minute(0).message("How do I set this up?"),
        ResponseBuilder::new("a1").minute(1).sender("assistant").parent("q").message("First try"),
        ResponseBuilder::new("a2").minute(2).sender("assistant").parent("q").message("Second try"),
        ResponseBuilder::new("q2").minute(3).parent("a1").message("Thanks").audio(),
        ResponseBuilder::new("a3").minute(4).sender("assistant").parent("q2").message("Welcome"),
    ]
}
