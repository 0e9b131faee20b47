use super::*;

#[test]
fn endpoints_match_backend_paths() {
    assert_eq!(PROCESS_TOPIC_ENDPOINT, "/api/process-topic");
    assert_eq!(QUERY_RAG_ENDPOINT, "/api/query-rag");
    assert_eq!(HEALTH_ENDPOINT, "/api/health");
}

#[test]
fn failure_message_prefers_detail() {
    let body = ErrorBody { detail: Some(serde_json::json!("Error processing topic: timeout")) };
    assert_eq!(
        failure_message(Some(&body), PROCESS_TOPIC_FAILED),
        "Error processing topic: timeout"
    );
}

#[test]
fn failure_message_falls_back_without_body() {
    assert_eq!(failure_message(None, PROCESS_TOPIC_FAILED), "Failed to process topic");
    assert_eq!(failure_message(None, QUERY_RAG_FAILED), "Failed to query RAG system");
}

#[test]
fn failure_message_falls_back_on_empty_detail() {
    let body = ErrorBody { detail: Some(serde_json::json!("")) };
    assert_eq!(failure_message(Some(&body), QUERY_RAG_FAILED), "Failed to query RAG system");
}

#[test]
fn process_topic_payload_sends_topic_verbatim() {
    assert_eq!(
        process_topic_payload("  Diffusion models "),
        serde_json::json!({ "topic": "  Diffusion models " })
    );
}

#[test]
fn query_rag_payload_carries_session_and_question() {
    assert_eq!(
        query_rag_payload("abc", "Which paper is most cited?"),
        serde_json::json!({ "session_id": "abc", "question": "Which paper is most cited?" })
    );
}
