//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`research`, `topic_form`, `papers`, `chat`) so
//! components depend on small focused models. The models are plain structs;
//! components wrap them in `RwSignal`s and keep the transition logic here,
//! where it is testable without a DOM.

pub mod chat;
pub mod papers;
pub mod research;
pub mod topic_form;
