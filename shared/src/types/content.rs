//! Structured year content as emitted by the generative backend
//!
//! Every field defaults to empty so that partially shaped model output still
//! deserializes and reaches validation; the validator decides whether the
//! gaps matter. `majorEvents` and `music.hits` are read leniently: a null,
//! an object or other wrong shape becomes an empty list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{SharedError, SharedResult};

/// Fixed-shape record describing one historical year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredContent {
    pub introduction: String,
    pub music: Music,
    #[serde(deserialize_with = "lenient_events")]
    pub major_events: Vec<MajorEvent>,
    pub fashion: Fashion,
    pub ideologies: Ideologies,
    pub technology: Technology,
    pub daily_life: DailyLife,
    pub memories: Vec<Memory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Music {
    #[serde(deserialize_with = "lenient_hits")]
    pub hits: Vec<MusicHit>,
    pub trends: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicHit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MajorEvent {
    pub date: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fashion {
    pub mens: Vec<String>,
    pub womens: Vec<String>,
    pub accessories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ideologies {
    pub political: Vec<String>,
    pub social: Vec<String>,
    pub economic: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Technology {
    pub innovations: Vec<String>,
    pub daily_life: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyLife {
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub lifestyle: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
    pub name: String,
    pub city: String,
    pub memory: String,
}

impl StructuredContent {
    /// Parse raw model text, tolerating a surrounding markdown code fence.
    ///
    /// The fence is stripped once and parsing is attempted once; no further
    /// extraction is tried.
    pub fn from_model_text(text: &str) -> SharedResult<Self> {
        let body = strip_code_fences(text);
        serde_json::from_str(body).map_err(|e| SharedError::DeserializationError {
            message: format!("model output is not valid year content JSON: {e}"),
        })
    }

    /// Compact JSON rendering used for scanning and logging
    pub fn to_json_text(&self) -> SharedResult<String> {
        serde_json::to_string(self).map_err(|e| SharedError::SerializationError {
            message: e.to_string(),
        })
    }
}

/// Elements of a JSON array; anything else has none
fn array_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Keep the events that parse, drop the rest
fn lenient_events<'de, D>(deserializer: D) -> Result<Vec<MajorEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = array_items(Value::deserialize(deserializer)?);
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Like [`lenient_events`], but a bare string is taken as a song title
fn lenient_hits<'de, D>(deserializer: D) -> Result<Vec<MusicHit>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = array_items(Value::deserialize(deserializer)?);
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(title) => Some(MusicHit {
                title,
                description: String::new(),
            }),
            other => serde_json::from_value(other).ok(),
        })
        .collect())
}

/// Remove leading ```` ```json ```` / ```` ``` ```` and trailing ```` ``` ```` markers
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}
