//! Wire types of the conventional list resource
//!
//! `GET/POST/PUT/DELETE /api/{mode}` as consumed by the unified list widget.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A server record. Only `id` is assumed; every other field is read by column key.
pub type Record = Map<String, Value>;

/// Page size requested by the list widget
pub const PAGE_SIZE: u32 = 10;

/// Response of `GET /api/{mode}?page=&size=&search=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    #[serde(default)]
    pub content: Vec<Record>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Body of create (POST) and update (PUT)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub title: String,
    pub owner: String,
}

/// Reply of create / update / delete.
///
/// Create answers `{"status":"success","id":..}`, update `{"status":"updated"}`,
/// delete `{"status":"deleted","count":..}` and optionally a `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl MutationResult {
    pub const STATUS_CREATED: &'static str = "success";
    pub const STATUS_UPDATED: &'static str = "updated";

    pub fn has_status(&self, expected: &str) -> bool {
        self.status.as_deref() == Some(expected)
    }

    /// Non-blank `message` of the reply
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Renders a JSON value the way the table shows it: strings verbatim,
/// null as empty, everything else as JSON text.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
