//! HTTP integration: the full serve surface against MockLlm on an ephemeral listener.

use std::sync::Arc;

use parley::MockLlm;
use serve::run_serve_on_listener;

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let llm = Arc::new(MockLlm::reply("analysis"));
    tokio::spawn(async move {
        let _ = run_serve_on_listener(listener, llm).await;
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn analyze_returns_all_four_specialists() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/claims/analyze", base))
        .json(&serde_json::json!({
            "claim_text": "Rear-ended at a stoplight on 2024-01-10; bumper and trunk damage."
        }))
        .send()
        .await
        .expect("analyze request");
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.expect("json body");
    let specialists = body["specialists"].as_array().expect("specialists array");
    assert_eq!(specialists.len(), 4);
    let names: Vec<&str> = specialists
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["coverage", "damage", "fraud", "summary"]);
    assert!(specialists.iter().all(|s| s["reply"] == "analysis"));
    assert!(specialists.iter().all(|s| s["is_error"] == false));

    let combined = body["combined"].as_str().expect("combined");
    for name in ["coverage", "damage", "fraud", "summary"] {
        assert!(combined.contains(&format!("## {}", name)), "{}", combined);
    }
    assert!(!body["request_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_rejects_empty_claim_text() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/claims/analyze", base))
        .json(&serde_json::json!({ "claim_text": "   " }))
        .send()
        .await
        .expect("analyze request");
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.expect("json body");
    assert!(body["error"].as_str().unwrap().contains("claim_text"));
}

#[tokio::test]
async fn health_reports_ok() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{}/health", base))
        .await
        .expect("health request");
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("json body");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn metrics_count_served_requests() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .post(format!("{}/claims/analyze", base))
            .json(&serde_json::json!({ "claim_text": "Hail damage to roof and hood." }))
            .send()
            .await
            .expect("analyze request");
        assert_eq!(resp.status(), 200);
    }

    let resp = reqwest::get(format!("{}/metrics", base))
        .await
        .expect("metrics request");
    assert_eq!(resp.status(), 200);
    let body: serve::MetricsResponse = resp.json().await.expect("metrics body");
    assert_eq!(body.requests_total, 2);
    assert_eq!(body.failures_total, 0);
    assert_eq!(body.specialist_runs_total, 8);
}
