//! Claim triage server binary.
//!
//! Env: `OPENAI_API_KEY` (required by the client), `PARLEY_MODEL` (default
//! gpt-4o-mini), `PARLEY_SERVE_ADDR` (default 127.0.0.1:8080).

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use parley::ChatOpenAI;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("serve=info,parley=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let model = std::env::var("PARLEY_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
    let llm = Arc::new(ChatOpenAI::new(model));

    let addr = std::env::var("PARLEY_SERVE_ADDR").ok();
    serve::run_serve(addr.as_deref(), llm).await
}
