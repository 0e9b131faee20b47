//! Shared wire DTOs for the browser/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Deserialization is lenient:
//! optional collections and flags accept both a missing key and an explicit
//! `null`, since the backend emits either depending on which pipeline stage
//! produced the response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Fallback heading when the backend omits the summary title.
pub const DEFAULT_SUMMARY_TITLE: &str = "Comprehensive Summary";

/// Body of `POST /api/process-topic`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTopicRequest {
    pub topic: String,
}

/// Result of processing a topic: verdict, summary, papers, and RAG session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessTopicResponse {
    /// Whether the backend accepted the topic as AI-related.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_valid_ai_topic: bool,
    /// Human-readable rejection or pipeline error, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Synthesized multi-section summary, absent when generation failed.
    #[serde(default)]
    pub comprehensive_summary: Option<ComprehensiveSummary>,
    /// Source papers retrieved for the topic.
    #[serde(default, deserialize_with = "null_as_default")]
    pub papers: Vec<Paper>,
    /// Token identifying the backend RAG session for follow-up questions.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Whether the RAG index is built and ready for questions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rag_ready: bool,
    /// Progress text shown while the RAG index is still building.
    #[serde(default)]
    pub rag_progress: Option<String>,
}

/// Structured summary synthesized from the retrieved papers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
}

impl ComprehensiveSummary {
    /// Title to display, falling back to [`DEFAULT_SUMMARY_TITLE`].
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_SUMMARY_TITLE)
    }
}

/// One top-level summary section. `content` is markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subsections: Vec<SubSection>,
}

/// Nested summary section. `content` is markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
}

/// A source paper as listed in the results view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub title: String,
    /// Comma-joined author names, preformatted by the backend.
    #[serde(default)]
    pub authors: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub arxiv_id: String,
    /// Landing page on arXiv.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// Body of `POST /api/query-rag`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRagRequest {
    pub session_id: String,
    pub question: String,
}

/// Answer to a RAG question plus the papers it cites.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRagResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A citation attached to a RAG answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub arxiv_id: String,
    #[serde(default)]
    pub relevance: Option<String>,
}

/// Error payload carried by non-2xx responses.
///
/// `detail` is usually a string; request-validation failures carry a list of
/// `{ "msg": ... }` objects instead, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Flatten `detail` into a displayable message, if it carries any text.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(text) => Some(text.trim().to_owned()).filter(|t| !t.is_empty()),
            serde_json::Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        }
    }
}

/// Backend health probe body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
