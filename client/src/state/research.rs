//! Page-level research state: which view is showing, the accepted result, and
//! the last error.
//!
//! DESIGN
//! ======
//! The error and the results view are mutually exclusive: an error keeps the
//! page on the topic-entry view, and accepting a result clears the error.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use crate::net::types::{ComprehensiveSummary, Paper, ProcessTopicResponse};

/// Shown when the backend rejects a topic without saying why.
pub const NOT_AI_TOPIC_MESSAGE: &str = "The topic is not related to AI technology.";
/// Shown when a topic request fails without a message.
pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process the topic";

/// Primary view of the research page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Topic entry form.
    #[default]
    Input,
    /// Summary, papers, and chat for an accepted topic.
    Results,
}

/// Research page state, provided as a `RwSignal` context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResearchState {
    pub view: View,
    pub results: Option<ProcessTopicResponse>,
    pub error: String,
}

/// RAG session details needed to mount the chat panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    pub session_id: String,
    pub rag_ready: bool,
    pub rag_progress: Option<String>,
}

impl ResearchState {
    /// Adopt a backend response: rejections become the page error, accepted
    /// topics switch to the results view.
    pub fn apply_process_result(&mut self, resp: ProcessTopicResponse) {
        self.error.clear();
        if !resp.is_valid_ai_topic {
            self.error = resp
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| NOT_AI_TOPIC_MESSAGE.to_owned());
            return;
        }
        self.results = Some(resp);
        self.view = View::Results;
    }

    /// Record a failed topic request. The view does not change.
    pub fn apply_failure(&mut self, message: &str) {
        self.error = if message.trim().is_empty() {
            PROCESS_FAILED_MESSAGE.to_owned()
        } else {
            message.to_owned()
        };
    }

    /// Return to topic entry, discarding the previous results.
    pub fn new_search(&mut self) {
        *self = Self::default();
    }

    pub fn summary(&self) -> Option<&ComprehensiveSummary> {
        self.results.as_ref()?.comprehensive_summary.as_ref()
    }

    pub fn papers(&self) -> &[Paper] {
        self.results.as_ref().map_or(&[], |r| r.papers.as_slice())
    }

    pub fn chat_session(&self) -> Option<ChatSession> {
        chat_session(self.results.as_ref()?)
    }
}

/// Extract the chat session from a result; `None` without a session id.
pub fn chat_session(results: &ProcessTopicResponse) -> Option<ChatSession> {
    let session_id = results.session_id.as_deref().filter(|id| !id.is_empty())?;
    Some(ChatSession {
        session_id: session_id.to_owned(),
        rag_ready: results.rag_ready,
        rag_progress: results.rag_progress.clone().filter(|p| !p.is_empty()),
    })
}
