//! Data structures representing HTTP Archive (HAR) captures.
//!
//! Two layers are modeled deliberately:
//!
//! - [`HarDocument`] keeps the capture as raw JSON values. The per-entry
//!   files are written from these, so every field of the original entry
//!   survives, including ones this tool knows nothing about.
//! - [`HarEntry`] and friends are typed, read-only views over one raw entry,
//!   covering only the fields the splitter inspects. Absent fields are
//!   `Option`s, so presence checks become pattern matches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SplitError;

/// A parsed HAR document, decomposed into its `log` envelope.
///
/// `version`, `creator` and `pages` are opaque pass-through values: their
/// internal structure is never inspected, they are copied verbatim into the
/// summary file. `raw_entries` holds the original entry objects in capture
/// order.
#[derive(Debug)]
pub struct HarDocument {
    pub version: Option<Value>,
    pub creator: Option<Value>,
    pub pages: Option<Value>,
    pub raw_entries: Vec<Value>,
}

impl HarDocument {
    /// Destructure an already-parsed JSON value into a HAR document.
    ///
    /// Requires `log.entries` to exist and be an array; anything else is an
    /// [`SplitError::InvalidFormat`]. No deeper validation happens here;
    /// per-entry fields are checked when the entry views are built.
    pub fn from_value(document: Value) -> Result<Self, SplitError> {
        let Value::Object(mut root) = document else {
            return Err(SplitError::invalid_format("top level is not a JSON object"));
        };

        let Some(Value::Object(mut log)) = root.remove("log") else {
            return Err(SplitError::invalid_format(
                "missing top-level `log` object",
            ));
        };

        let Some(Value::Array(raw_entries)) = log.remove("entries") else {
            return Err(SplitError::invalid_format(
                "`log.entries` is missing or not an array",
            ));
        };

        Ok(Self {
            version: log.remove("version"),
            creator: log.remove("creator"),
            pages: log.remove("pages"),
            raw_entries,
        })
    }
}

/// Typed view over one captured exchange.
///
/// Built per entry with [`HarEntry::from_value`]; the view is only read,
/// never written back, so the source entry stays untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct HarEntry {
    #[serde(rename = "startedDateTime")]
    pub started_date_time: Option<String>,
    pub request: HarRequest,
    pub response: HarResponse,
}

/// The request half of an exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct HarRequest {
    pub method: String,
    pub url: String,
    /// Posted body, recorded by the capturing browser/proxy when present.
    #[serde(rename = "postData")]
    pub post_data: Option<PostData>,
}

/// The response half of an exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct HarResponse {
    /// HTTP status code; captures use 0 for aborted requests.
    pub status: i64,
    pub content: Option<Content>,
}

/// Request body as recorded in the capture.
#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    pub text: Option<String>,
}

/// Response body as recorded in the capture.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub text: Option<String>,
}

impl HarEntry {
    /// Build a typed view over a raw entry value.
    pub fn from_value(raw: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(raw.clone())
    }

    /// Request body text, if the capture recorded a non-empty one.
    pub fn request_body(&self) -> Option<&str> {
        self.request
            .post_data
            .as_ref()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Response body text, if the capture recorded a non-empty one.
    pub fn response_body(&self) -> Option<&str> {
        self.response
            .content
            .as_ref()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

/// Aggregate index written to `00_summary.json`.
#[derive(Debug, Serialize)]
pub struct HarSummary {
    pub log: SummaryLog,
}

/// Capture metadata plus one [`SummaryRecord`] per entry.
///
/// Absent metadata keys are omitted from the output, matching what the
/// capture itself carried.
#[derive(Debug, Serialize)]
pub struct SummaryLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Value>,
    pub entries: Vec<SummaryRecord>,
}

/// Per-entry projection for the summary index.
///
/// `index` is the entry's 0-based position in the capture and doubles as the
/// filename prefix of the per-entry files.
#[derive(Debug, Serialize)]
pub struct SummaryRecord {
    pub index: usize,
    pub url: String,
    pub method: String,
    pub status: i64,
    #[serde(
        rename = "startedDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_date_time: Option<String>,
}
