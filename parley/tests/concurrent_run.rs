//! Fan-out/fan-in integration: specialists run in parallel over one input.

use std::sync::Arc;

use async_trait::async_trait;

use parley::{
    run_concurrent, AgentError, LlmClient, LlmResponse, Message, MockLlm, Specialist,
};

fn specialists() -> Vec<Specialist> {
    vec![
        Specialist::new("coverage", "Review coverage."),
        Specialist::new("damage", "Assess damage."),
        Specialist::new("fraud", "Look for fraud signals."),
        Specialist::new("summary", "Summarize for the customer."),
    ]
}

#[tokio::test]
async fn all_specialists_run_in_declaration_order() {
    let llm = Arc::new(MockLlm::reply("analysis"));
    let outcome = run_concurrent(llm, &specialists(), "claim text").await;

    let names: Vec<&str> = outcome.runs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["coverage", "damage", "fraud", "summary"]);
    assert!(outcome.runs.iter().all(|r| r.reply == "analysis"));
    assert!(!outcome.has_errors());
}

#[tokio::test]
async fn combined_contains_every_section() {
    let llm = Arc::new(MockLlm::reply("analysis"));
    let outcome = run_concurrent(llm, &specialists(), "claim text").await;
    let combined = outcome.combined();
    for name in ["coverage", "damage", "fraud", "summary"] {
        assert!(combined.contains(&format!("## {}", name)), "{}", combined);
    }
}

/// LLM that fails whenever the system instructions carry a marker; lets one
/// specialist fail while the others share the same client.
struct FailOnMarker;

#[async_trait]
impl LlmClient for FailOnMarker {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let marked = messages
            .first()
            .map(|m| m.content().contains("FAIL"))
            .unwrap_or(false);
        if marked {
            Err(AgentError::ExecutionFailed("synthetic failure".into()))
        } else {
            Ok(LlmResponse {
                content: "ok".into(),
                ..Default::default()
            })
        }
    }
}

#[tokio::test]
async fn one_failure_does_not_poison_the_rest() {
    let specs = vec![
        Specialist::new("good-a", "Analyze."),
        Specialist::new("bad", "FAIL on purpose."),
        Specialist::new("good-b", "Analyze."),
    ];
    let outcome = run_concurrent(Arc::new(FailOnMarker), &specs, "input").await;

    assert!(outcome.has_errors());
    assert_eq!(outcome.runs.len(), 3);
    assert!(!outcome.runs[0].is_error);
    assert!(outcome.runs[1].is_error);
    assert!(outcome.runs[1].reply.contains("synthetic failure"));
    assert!(!outcome.runs[2].is_error);
    assert_eq!(outcome.runs[2].reply, "ok");
}
