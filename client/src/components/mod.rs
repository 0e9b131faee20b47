//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the topic form and the results view. Page-wide state is
//! read from Leptos context; row-level state (accordion, chat history) lives
//! in component-local signals.

pub mod backend_status;
pub mod chat_panel;
pub mod comprehensive_summary;
pub mod papers_list;
pub mod topic_input;
