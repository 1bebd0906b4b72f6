//! Claim triage: four fixed specialists fanned out over one claim text.
//!
//! Each specialist is an independently-prompted, tool-less, single-shot agent;
//! they share one LLM client and run concurrently. The instruction strings are
//! static configuration, not behavior: the analysis itself happens in the model.

use std::sync::Arc;

use parley::{run_concurrent, ConcurrentOutcome, LlmClient, Specialist};

const COVERAGE_INSTRUCTIONS: &str = "You are an insurance coverage reviewer. Given a claim \
description, identify which policy coverages likely apply (collision, comprehensive, \
liability, medical), note any obvious exclusions, and flag missing information needed to \
confirm coverage. Answer in short bullet points.";

const DAMAGE_INSTRUCTIONS: &str = "You are a damage assessor. Given a claim description, \
list the reported damage, estimate a severity (minor / moderate / severe / total loss), \
and note any damage that should be inspected in person before settlement. Answer in short \
bullet points.";

const FRAUD_INSTRUCTIONS: &str = "You are a fraud analyst. Given a claim description, point \
out inconsistencies, unusual timing, or patterns that merit a closer look, and rate the \
overall fraud risk as low, medium, or high with a one-line justification. Do not accuse; \
describe signals only.";

const SUMMARY_INSTRUCTIONS: &str = "You are a claims correspondent. Given a claim \
description, write a short, plain-language summary of the incident and the likely next \
steps, suitable for sending to the customer. Three sentences at most.";

/// The four fixed claim specialists, in response order.
pub fn claim_specialists() -> Vec<Specialist> {
    vec![
        Specialist::new("coverage", COVERAGE_INSTRUCTIONS),
        Specialist::new("damage", DAMAGE_INSTRUCTIONS),
        Specialist::new("fraud", FRAUD_INSTRUCTIONS),
        Specialist::new("summary", SUMMARY_INSTRUCTIONS),
    ]
}

/// Fan-out runner bound to one LLM client.
///
/// **Interaction**: Held by the app state; the analyze handler calls
/// [`ClaimTriage::analyze`] once per request.
pub struct ClaimTriage {
    llm: Arc<dyn LlmClient>,
    specialists: Vec<Specialist>,
}

impl ClaimTriage {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            specialists: claim_specialists(),
        }
    }

    /// Runs all specialists over the claim text concurrently.
    pub async fn analyze(&self, claim_text: &str) -> ConcurrentOutcome {
        run_concurrent(self.llm.clone(), &self.specialists, claim_text).await
    }

    /// Number of configured specialists.
    pub fn specialist_count(&self) -> usize {
        self.specialists.len()
    }
}
