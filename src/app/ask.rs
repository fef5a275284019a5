//! Question orchestration methods
//!
//! Asking runs in two steps: a health precheck (nothing is asked against an
//! empty knowledge base), then the question itself.

use crate::api::{ApiError, AskResponse, HealthStatus, SuggestResponse};
use crate::model::session::THINKING;
use crate::model::Focus;
use crate::services::{ApiRequest, HealthPurpose};
use crate::{logic, App};

impl App {
    pub(crate) fn ask(&mut self) {
        let question = self.model.session.question.trim().to_string();
        if question.is_empty() {
            self.model.show_error_toast("Type a question");
            return;
        }

        let top_k = logic::ui::parse_top_k(&self.model.session.top_k_input, self.default_top_k);
        self.send(ApiRequest::Health {
            purpose: HealthPurpose::AskPrecheck { question, top_k },
        });
    }

    /// Second half of `ask`, once the precheck health response arrives
    pub(crate) fn continue_ask(&mut self, health: &HealthStatus, question: String, top_k: u32) {
        if !health.ok || health.chunks == 0 {
            self.model.show_error_toast("Please upload and index a document first");
            return;
        }

        let session = &mut self.model.session;
        session.answer = THINKING.to_string();
        session.citations.clear();
        session.citations_open = false;
        session.last_question = Some(question.clone());

        tracing::info!(top_k, "Asking question");
        self.send(ApiRequest::Ask { question, top_k });
    }

    /// Apply an answer. `question` is the one it answers, which may be older
    /// than the last question sent.
    pub(crate) fn finish_ask(&mut self, question: String, result: Result<AskResponse, ApiError>) {
        self.model.session.last_question = Some(question);
        match result {
            Ok(response) => {
                let session = &mut self.model.session;
                session.answer = if response.answer.is_empty() {
                    "No answer".to_string()
                } else {
                    response.answer
                };
                session.citations_open = !response.citations.is_empty();
                session.citations = response.citations;

                if response.model.is_some() {
                    self.model.backend.model_name = response.model;
                }
            }
            Err(e) => {
                tracing::warn!("Ask failed: {}", e);
                self.model.session.answer = match e.details_json() {
                    Some(details) => format!("Error: {}\n{}", e, details),
                    None => format!("Error: {}", e),
                };
            }
        }
        self.refresh_health();
    }

    pub(crate) fn toggle_suggestions(&mut self) {
        self.send(ApiRequest::Suggest);
    }

    pub(crate) fn finish_suggest(&mut self, result: Result<SuggestResponse, ApiError>) {
        let session = &mut self.model.session;
        session.suggestions = match result {
            Ok(response) => response.suggestions,
            Err(e) => {
                tracing::warn!("Suggestions unavailable: {}", e);
                Vec::new()
            }
        };
        session.suggestions_visible = !session.suggestions_visible;
        session.selected_suggestion = if session.suggestions.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub(crate) fn pick_suggestion(&mut self, index: usize) {
        let Some(text) = self.model.session.suggestions.get(index).cloned() else {
            return;
        };
        self.model.session.selected_suggestion = Some(index);
        self.model.session.question = text;
        self.model.ui.focus = Focus::Question;
    }

    pub(crate) fn step_top_k(&mut self, delta: i32) {
        let session = &mut self.model.session;
        session.top_k_input =
            logic::ui::step_top_k(&session.top_k_input, self.default_top_k, delta);
    }
}
