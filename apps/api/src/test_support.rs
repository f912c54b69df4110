//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::Config;
use crate::llm_client::{ChatModel, ChatRequest, LlmError};

pub fn config(api_key: Option<&str>, base_url: &str) -> Config {
    Config {
        groq_api_key: api_key.map(str::to_string),
        groq_base_url: base_url.to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

enum Script {
    Reply(String),
    Status(u16),
}

/// Deterministic `ChatModel` that always gives the same answer and counts calls.
pub struct ScriptedModel {
    script: Script,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Self {
        Self::new(Script::Reply(reply.to_string()))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(Script::Status(status))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}
