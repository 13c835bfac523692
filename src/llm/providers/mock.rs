//! Scripted provider for orchestrator tests. Records every payload it is
//! handed and replays a queued outcome per call.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::history::Turn;
use crate::llm::ProviderError;

#[derive(Debug)]
pub enum Step {
    Reply(String),
    Empty,
    RateLimited,
    Fail,
}

#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    script: Arc<Mutex<VecDeque<Step>>>,
    calls: Arc<Mutex<Vec<Vec<Turn>>>>,
}

impl MockProvider {
    pub fn push(&self, step: Step) {
        self.script.lock().unwrap().push_back(step);
    }

    /// Payloads seen so far, in call order.
    pub fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls.lock().unwrap().clone()
    }

    pub async fn complete(&self, messages: &[Turn]) -> Result<Option<String>, ProviderError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match self.script.lock().unwrap().pop_front() {
            Some(Step::Reply(text)) => Ok(Some(text)),
            Some(Step::Empty) => Ok(None),
            Some(Step::RateLimited) => {
                Err(ProviderError::RateLimited("HTTP 429 Too Many Requests".into()))
            }
            Some(Step::Fail) => Err(ProviderError::Request("connection reset".into())),
            // Unscripted calls answer with a fixed reply.
            None => Ok(Some("ok".into())),
        }
    }
}
