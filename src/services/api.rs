use tokio::sync::mpsc;

use crate::api::{
    ApiError, AskResponse, DocQaClient, HealthStatus, PingResponse, ResetResponse,
    SuggestResponse, UploadResponse,
};
use crate::model::types::PendingFile;

/// Why a health check was requested
#[derive(Debug, Clone, PartialEq)]
pub enum HealthPurpose {
    /// Status display refresh (timer or after an action)
    Poll,
    /// Gate before asking: the question is only sent if chunks are indexed
    AskPrecheck { question: String, top_k: u32 },
}

/// API request types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Health { purpose: HealthPurpose },
    Upload { files: Vec<PendingFile> },
    Suggest,
    Ask { question: String, top_k: u32 },
    Reset,
    Ping,
}

/// API response types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Health {
        purpose: HealthPurpose,
        status: HealthStatus,
    },
    Upload {
        result: Result<UploadResponse, ApiError>,
    },
    Suggest {
        result: Result<SuggestResponse, ApiError>,
    },
    Ask {
        question: String,
        result: Result<AskResponse, ApiError>,
    },
    Reset {
        result: Result<ResetResponse, ApiError>,
    },
    Ping {
        result: Result<PingResponse, ApiError>,
    },
}

/// API service worker.
///
/// Every request runs in its own task, so a slow upload never holds up a
/// health poll. Requests are neither deduplicated nor cancelled.
pub struct ApiService {
    client: DocQaClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: DocQaClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
        }
    }

    fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            tracing::debug!(?request, "API request started");
            let response = Self::execute_request(&client, request).await;
            if response_tx.send(response).is_err() {
                tracing::debug!("Response dropped: controller has shut down");
            }
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &DocQaClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Health { purpose } => {
                let status = client.health().await;
                ApiResponse::Health { purpose, status }
            }

            ApiRequest::Upload { files } => {
                let result = client.upload(&files).await;
                ApiResponse::Upload { result }
            }

            ApiRequest::Suggest => {
                let result = client.suggest().await;
                ApiResponse::Suggest { result }
            }

            ApiRequest::Ask { question, top_k } => {
                let result = client.ask(&question, top_k).await;
                ApiResponse::Ask { question, result }
            }

            ApiRequest::Reset => {
                let result = client.reset().await;
                ApiResponse::Reset { result }
            }

            ApiRequest::Ping => {
                let result = client.ping().await;
                ApiResponse::Ping { result }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: DocQaClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(client, response_tx);
        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        tracing::debug!("API service stopped");
    });

    (request_tx, response_rx)
}
