//! Scripted text backends for orchestration tests

#![allow(dead_code)] // Each test binary uses a different subset

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use generator::{BackendFailure, TextBackend};

/// One scripted reply from a model
#[derive(Debug, Clone)]
pub enum Step {
    Text(String),
    RateLimited,
    Fail(String),
    /// Never completes; only the gateway timeout ends the call
    Hang,
}

/// Backend replaying per-model scripts and recording every call
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    scripts: Arc<Mutex<HashMap<String, VecDeque<Step>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, model: &str, steps: Vec<Step>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(model.to_string(), steps.into());
        self
    }

    /// Handle for inspecting calls after the backend has been moved
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }

    fn next_step(&self, model: &str) -> Step {
        self.scripts
            .lock()
            .unwrap()
            .get_mut(model)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Step::Fail(format!("no script left for {model}")))
    }
}

#[async_trait]
impl TextBackend for ScriptedBackend {
    async fn generate_content(&self, model: &str, _prompt: &str) -> Result<String, BackendFailure> {
        self.calls.lock().unwrap().push(model.to_string());

        match self.next_step(model) {
            Step::Text(text) => Ok(text),
            Step::RateLimited => Err(BackendFailure::RateLimited {
                message: "429 Too Many Requests".to_string(),
            }),
            Step::Fail(message) => Err(BackendFailure::Failed { message }),
            Step::Hang => std::future::pending().await,
        }
    }
}

/// Number of calls made to `model`
pub fn calls_to(log: &Arc<Mutex<Vec<String>>>, model: &str) -> usize {
    log.lock().unwrap().iter().filter(|called| called.as_str() == model).count()
}
