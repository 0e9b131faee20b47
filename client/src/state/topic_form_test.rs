use super::*;

#[test]
fn validate_topic_rejects_blank_input() {
    assert_eq!(validate_topic(""), Err(EMPTY_TOPIC_MESSAGE));
    assert_eq!(validate_topic(" \t\n"), Err(EMPTY_TOPIC_MESSAGE));
}

#[test]
fn validate_topic_passes_text_through_untrimmed() {
    assert_eq!(validate_topic(" RAG Systems "), Ok(" RAG Systems ".to_owned()));
}

#[test]
fn begin_submit_blank_topic_sets_message_without_loading() {
    let mut form = TopicFormState { topic: "   ".to_owned(), ..TopicFormState::default() };
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.error, EMPTY_TOPIC_MESSAGE);
    assert!(!form.loading);
}

#[test]
fn begin_submit_valid_topic_clears_error_and_loads() {
    let mut form = TopicFormState {
        topic: "Transformer Architecture".to_owned(),
        error: "previous".to_owned(),
        ..TopicFormState::default()
    };
    assert_eq!(form.begin_submit().as_deref(), Some("Transformer Architecture"));
    assert!(form.loading);
    assert!(form.error.is_empty());
}

#[test]
fn begin_submit_while_loading_is_ignored() {
    let mut form = TopicFormState { topic: "LLM".to_owned(), loading: true, ..TopicFormState::default() };
    assert_eq!(form.begin_submit(), None);
    assert!(form.loading);
}

#[test]
fn finish_submit_success_keeps_error_empty() {
    let mut form = TopicFormState { loading: true, ..TopicFormState::default() };
    form.finish_submit(Ok(()));
    assert!(!form.loading);
    assert!(form.error.is_empty());
}

#[test]
fn finish_submit_failure_adopts_message() {
    let mut form = TopicFormState { loading: true, ..TopicFormState::default() };
    form.finish_submit(Err("Not an AI topic".to_owned()));
    assert!(!form.loading);
    assert_eq!(form.error, "Not an AI topic");
}

#[test]
fn finish_submit_failure_without_message_uses_fallback() {
    let mut form = TopicFormState { loading: true, ..TopicFormState::default() };
    form.finish_submit(Err(String::new()));
    assert_eq!(form.error, SUBMIT_FAILED_MESSAGE);
}
