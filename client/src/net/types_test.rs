use super::*;

// =============================================================
// ProcessTopicResponse
// =============================================================

#[test]
fn process_topic_response_parses_accepted_result() {
    let json = serde_json::json!({
        "is_valid_ai_topic": true,
        "comprehensive_summary": {
            "title": "Retrieval-Augmented Generation",
            "sections": [{
                "heading": "Overview",
                "content": "RAG pairs a retriever with a generator.",
                "subsections": [{ "heading": "Retrievers", "content": "Dense and sparse." }]
            }]
        },
        "papers": [{
            "title": "RAG for Knowledge-Intensive NLP",
            "authors": "Lewis, Perez",
            "abstract": "We explore a general-purpose fine-tuning recipe.",
            "arxiv_id": "2005.11401",
            "url": "https://arxiv.org/abs/2005.11401",
            "pdf_url": "https://arxiv.org/pdf/2005.11401"
        }],
        "session_id": "sess-1",
        "rag_ready": true,
        "error": null,
        "rag_progress": "Indexed 1 paper"
    });

    let resp: ProcessTopicResponse = serde_json::from_value(json).unwrap();
    assert!(resp.is_valid_ai_topic);
    assert_eq!(resp.session_id.as_deref(), Some("sess-1"));
    assert!(resp.rag_ready);
    assert_eq!(resp.rag_progress.as_deref(), Some("Indexed 1 paper"));
    assert_eq!(resp.papers.len(), 1);
    assert_eq!(resp.papers[0].abstract_text, "We explore a general-purpose fine-tuning recipe.");
    assert_eq!(resp.papers[0].pdf_url.as_deref(), Some("https://arxiv.org/pdf/2005.11401"));

    let summary = resp.comprehensive_summary.unwrap();
    assert_eq!(summary.display_title(), "Retrieval-Augmented Generation");
    assert_eq!(summary.sections[0].subsections[0].heading, "Retrievers");
}

#[test]
fn process_topic_response_parses_rejection_with_nulls() {
    let json = r#"{
        "is_valid_ai_topic": false,
        "comprehensive_summary": null,
        "papers": null,
        "session_id": null,
        "rag_ready": null,
        "error": "Topic is about cooking, not AI."
    }"#;

    let resp: ProcessTopicResponse = serde_json::from_str(json).unwrap();
    assert!(!resp.is_valid_ai_topic);
    assert!(resp.papers.is_empty());
    assert!(!resp.rag_ready);
    assert!(resp.session_id.is_none());
    assert!(resp.comprehensive_summary.is_none());
    assert_eq!(resp.error.as_deref(), Some("Topic is about cooking, not AI."));
}

#[test]
fn process_topic_response_tolerates_missing_keys() {
    let resp: ProcessTopicResponse = serde_json::from_str(r#"{"is_valid_ai_topic": true}"#).unwrap();
    assert!(resp.papers.is_empty());
    assert!(!resp.rag_ready);
    assert!(resp.rag_progress.is_none());
}

// =============================================================
// ComprehensiveSummary
// =============================================================

#[test]
fn summary_title_falls_back_when_missing_or_blank() {
    let missing: ComprehensiveSummary = serde_json::from_str(r#"{"sections": []}"#).unwrap();
    assert_eq!(missing.display_title(), DEFAULT_SUMMARY_TITLE);

    let blank = ComprehensiveSummary { title: Some("  ".to_owned()), sections: Vec::new() };
    assert_eq!(blank.display_title(), DEFAULT_SUMMARY_TITLE);
}

#[test]
fn section_null_subsections_become_empty() {
    let section: Section =
        serde_json::from_str(r#"{"heading": "Limits", "content": "Latency.", "subsections": null}"#).unwrap();
    assert!(section.subsections.is_empty());
}

#[test]
fn paper_serializes_abstract_under_wire_name() {
    let paper = Paper { abstract_text: "text".to_owned(), ..Paper::default() };
    let value = serde_json::to_value(&paper).unwrap();
    assert_eq!(value["abstract"], "text");
    assert!(value.get("abstract_text").is_none());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn query_rag_request_uses_snake_case_keys() {
    let req = QueryRagRequest { session_id: "s-9".to_owned(), question: "What is RAG?".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "session_id": "s-9", "question": "What is RAG?" })
    );
}

#[test]
fn process_topic_request_body_shape() {
    let req = ProcessTopicRequest { topic: "LLM fine-tuning".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "topic": "LLM fine-tuning" }));
}

// =============================================================
// QueryRagResponse
// =============================================================

#[test]
fn query_rag_response_parses_sources() {
    let json = serde_json::json!({
        "answer": "It retrieves then generates.",
        "sources": [{ "arxiv_id": "2005.11401", "title": "RAG", "relevance": "high" }],
        "error": null
    });
    let resp: QueryRagResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].relevance.as_deref(), Some("high"));
}

#[test]
fn query_rag_response_without_sources_is_empty() {
    let resp: QueryRagResponse = serde_json::from_str(r#"{"answer": "n/a"}"#).unwrap();
    assert!(resp.sources.is_empty());
    assert!(resp.error.is_none());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_message_uses_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Session not found or expired."}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Session not found or expired."));
}

#[test]
fn error_body_message_joins_validation_list() {
    let body: ErrorBody = serde_json::from_str(
        r#"{"detail": [{"loc": ["body", "topic"], "msg": "field required"}, {"msg": "too short"}]}"#,
    )
    .unwrap();
    assert_eq!(body.message().as_deref(), Some("field required; too short"));
}

#[test]
fn error_body_message_none_for_empty_or_missing_detail() {
    assert!(ErrorBody::default().message().is_none());
    let blank: ErrorBody = serde_json::from_str(r#"{"detail": "   "}"#).unwrap();
    assert!(blank.message().is_none());
    let numeric: ErrorBody = serde_json::from_str(r#"{"detail": 42}"#).unwrap();
    assert!(numeric.message().is_none());
}

#[test]
fn health_status_reports_healthy() {
    let status: HealthStatus = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
    assert!(status.is_healthy());
    assert!(!HealthStatus { status: "degraded".to_owned() }.is_healthy());
}
