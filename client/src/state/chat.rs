//! RAG chat history and input state.
//!
//! DESIGN
//! ======
//! History is append-only for the lifetime of the chat panel: a query adds the
//! user message up front and exactly one assistant message (answer or apology)
//! when it settles.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{QueryRagResponse, Source};

/// Assistant reply appended when a query fails.
pub const QUERY_FAILED_REPLY: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message. Assistant content is markdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sources: Vec<Source>,
    pub error: bool,
}

impl ChatMessage {
    fn user(content: String) -> Self {
        Self { role: ChatRole::User, content, sources: Vec::new(), error: false }
    }

    fn answer(resp: QueryRagResponse) -> Self {
        Self { role: ChatRole::Assistant, content: resp.answer, sources: resp.sources, error: false }
    }

    fn failure() -> Self {
        Self { role: ChatRole::Assistant, content: QUERY_FAILED_REPLY.to_owned(), sources: Vec::new(), error: true }
    }
}

/// State for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub question: String,
    pub loading: bool,
}

impl ChatState {
    pub fn can_submit(&self, rag_ready: bool) -> bool {
        rag_ready && !self.loading && !self.question.trim().is_empty()
    }

    /// Start a query: append the user's message, clear the input, and return
    /// the question to send. `None` when a query cannot be sent right now.
    pub fn begin_query(&mut self, rag_ready: bool) -> Option<String> {
        if !self.can_submit(rag_ready) {
            return None;
        }
        let question = std::mem::take(&mut self.question);
        self.messages.push(ChatMessage::user(question.clone()));
        self.loading = true;
        Some(question)
    }

    /// Settle the in-flight query with its answer or a fixed apology.
    pub fn finish_query(&mut self, result: Result<QueryRagResponse, String>) {
        let reply = match result {
            Ok(resp) => ChatMessage::answer(resp),
            Err(_) => ChatMessage::failure(),
        };
        self.messages.push(reply);
        self.loading = false;
    }
}

/// Input placeholder for the current RAG readiness.
pub fn placeholder(rag_ready: bool) -> &'static str {
    if rag_ready { "Ask a question..." } else { "Waiting for RAG system..." }
}

/// One line of an answer's source list.
pub fn format_source(source: &Source) -> String {
    format!("\u{2022} {} ({})", source.title, source.arxiv_id)
}
