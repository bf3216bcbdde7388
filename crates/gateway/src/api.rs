//! HTTP API.
//!
//! Endpoints:
//!
//! - `POST /api/chat`: Send a message, get a command, routed or model reply
//! - `GET  /health`: Liveness and version
//! - `GET  /api/personas`: The persona table
//! - `GET  /api/commands?prefix=`: Command autocomplete
//! - `POST /api/context/preview`: Complexity verdict and assembly metadata, no provider call

use axum::{
    Router,
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use airwave_core::{ChatRequest, ChatResponse, PERSONAS, PersonaDescriptor};
use airwave_orchestrator::{AssemblyMetadata, CommandSuggestion, ContextPlan, suggest};

use crate::SharedState;

// ── Router ────────────────────────────────────────────────────────────────

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/personas", get(personas_handler))
        .route("/api/commands", get(commands_handler))
        .route("/api/context/preview", post(context_preview_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct PersonaListResponse {
    personas: Vec<&'static PersonaDescriptor>,
    count: usize,
}

#[derive(Deserialize)]
struct CommandQuery {
    #[serde(default)]
    prefix: String,
}

#[derive(Serialize)]
struct CommandListResponse {
    suggestions: Vec<CommandSuggestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContextPreviewRequest {
    #[serde(default)]
    content: String,
    #[serde(default)]
    agent_id: Option<String>,
}

#[derive(Serialize)]
struct ContextPreviewResponse {
    plan: ContextPlan,
    budget_chars: usize,
    metadata: AssemblyMetadata,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected chat request body");
        api_error(StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        content_len = request.content.len(),
        history = request.messages.len(),
        agent = request.persona_or_orchestrator(),
        provider = request.provider.as_str(),
        "Chat request"
    );

    match state.handler.handle(&request).await {
        Ok(result) => Ok(Json(ChatResponse::from(result))),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Chat request failed");
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process chat request",
            ))
        }
    }
}

async fn personas_handler() -> Json<PersonaListResponse> {
    let personas: Vec<&'static PersonaDescriptor> = PERSONAS.iter().collect();
    Json(PersonaListResponse {
        count: personas.len(),
        personas,
    })
}

async fn commands_handler(Query(query): Query<CommandQuery>) -> Json<CommandListResponse> {
    Json(CommandListResponse {
        suggestions: suggest(&query.prefix),
    })
}

async fn context_preview_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ContextPreviewRequest>, JsonRejection>,
) -> Result<Json<ContextPreviewResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid request body"))?;

    let preview = state
        .handler
        .preview(&request.content, request.agent_id.as_deref());

    Ok(Json(ContextPreviewResponse {
        budget_chars: preview.plan.options().max_chars,
        plan: preview.plan,
        metadata: preview.context.metadata,
    }))
}
