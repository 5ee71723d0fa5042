use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::error::{TranscriptError, TranscriptResult};
use crate::parsers::decode_timestamp;

/// Media tag that marks a response as carrying audio
pub const MEDIA_AUDIO: &str = "audio";

/// One validated conversational turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub sender: String,
    /// Message body with surrounding whitespace stripped
    pub message: String,
    /// `None` for roots; empty parent ids are normalized to `None`
    pub parent_id: Option<String>,
    pub media: Vec<String>,
}

impl Response {
    /// Validate a raw `{ "response": {...} }` entry from an export
    ///
    /// Required: `_id`, `create_time`, `message`, `sender`.
    /// Optional: `parent_response_id`, `media_types`.
    pub fn from_raw(entry: &Value) -> TranscriptResult<Self> {
        let raw = entry.get("response").ok_or(TranscriptError::MissingRequiredField("response"))?;

        let id = required_str(raw, "_id")?;
        let create_time =
            raw.get("create_time").ok_or(TranscriptError::MissingRequiredField("create_time"))?;
        let timestamp = decode_timestamp(create_time)?;
        let message = required_str(raw, "message")?.trim().to_string();
        let sender = required_str(raw, "sender")?;

        let parent_id = raw
            .get("parent_response_id")
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let media = raw
            .get("media_types")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Self { id, timestamp, sender, message, parent_id, media })
    }

    pub fn has_audio(&self) -> bool {
        self.media.iter().any(|m| m == MEDIA_AUDIO)
    }
}

fn required_str(raw: &Value, field: &'static str) -> TranscriptResult<String> {
    raw.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TranscriptError::MissingRequiredField(field))
}
