//! Backend Model
//!
//! What the client last heard from `/health`: server state, indexed chunk
//! count, and the generation model name. Remote-sourced; never persisted.

use super::types::ServerState;
use crate::api::HealthStatus;

const PLACEHOLDER: &str = "—";

#[derive(Clone, Debug)]
pub struct BackendModel {
    pub server: ServerState,

    /// Indexed chunk count; None until the first successful health check
    pub chunks: Option<u64>,

    pub model_name: Option<String>,

    /// Base URL shown in the header
    pub base_url: String,
}

impl BackendModel {
    pub fn new(base_url: String) -> Self {
        Self {
            server: ServerState::Unknown,
            chunks: None,
            model_name: None,
            base_url,
        }
    }

    pub fn apply_health(&mut self, health: &HealthStatus) {
        if health.ok {
            self.server = ServerState::Online;
            self.chunks = Some(health.chunks);
        } else {
            self.server = ServerState::Error;
            self.chunks = None;
        }
        self.model_name = health.model.clone();
    }

    pub fn server_label(&self) -> &'static str {
        match self.server {
            ServerState::Unknown => "…",
            ServerState::Online => "Online",
            ServerState::Error => "Error",
        }
    }

    pub fn chunks_label(&self) -> String {
        match self.chunks {
            Some(n) => n.to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn model_label(&self) -> &str {
        self.model_name.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn model_tag(&self) -> String {
        format!("Model: {}", self.model_label())
    }
}
