//! API Response Handler
//!
//! Routes responses from the background API service to the App.
//!
//! Response types:
//! - Health: status display refresh, or the precheck gating an ask
//! - Upload / Reset: knowledge base changes
//! - Suggest / Ask: question flow
//! - Ping: model diagnostic toast

use std::time::Instant;

use crate::services::api::{ApiResponse, HealthPurpose};
use crate::App;

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::Health { purpose, status } => {
            app.apply_health(&status);
            if let HealthPurpose::AskPrecheck { question, top_k } = purpose {
                app.continue_ask(&status, question, top_k);
            }
        }
        ApiResponse::Upload { result } => app.finish_upload(result, Instant::now()),
        ApiResponse::Suggest { result } => app.finish_suggest(result),
        ApiResponse::Ask { question, result } => {
            tracing::debug!(%question, ok = result.is_ok(), "Ask completed");
            app.finish_ask(question, result);
        }
        ApiResponse::Reset { result } => app.finish_reset(result),
        ApiResponse::Ping { result } => app.finish_ping(result),
    }
}
