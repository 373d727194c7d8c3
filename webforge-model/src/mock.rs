use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use webforge_core::{ForgeError, Result, TextCompletion};

/// Scripted completion provider for tests.
///
/// Responses are consumed in order, one per `complete` call; a pipeline run
/// that retries twice consumes three. An exhausted queue returns a provider
/// error, which is exactly how a flaky upstream surfaces to the pipeline.
pub struct MockCompletion {
    name: String,
    responses: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockCompletion {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), responses: Mutex::new(VecDeque::new()), calls: Mutex::new(vec![]) }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().expect("mock lock").push_back(response.into());
        self
    }

    /// Number of `complete` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock lock").len()
    }

    /// The (system, user) instruction pair of a recorded call.
    pub fn call(&self, index: usize) -> Option<(String, String)> {
        self.calls.lock().expect("mock lock").get(index).cloned()
    }
}

#[async_trait]
impl TextCompletion for MockCompletion {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.lock().expect("mock lock").push((system.to_string(), user.to_string()));
        self.responses
            .lock()
            .expect("mock lock")
            .pop_front()
            .ok_or_else(|| ForgeError::Provider("mock completion queue exhausted".to_string()))
    }
}
