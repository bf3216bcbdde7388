//! End-to-end integration tests for the Airwave orchestrator.
//!
//! These tests exercise the full pipeline from an HTTP chat request to the
//! provider wire format: configuration, framework loading, command and
//! routing stages, context assembly, and the real provider clients talking
//! to local mock servers.

use std::io::Write;
use std::sync::{Arc, Mutex};

use airwave_config::AppConfig;
use airwave_gateway::{GatewayState, build_router};
use airwave_orchestrator::RequestHandler;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

// ── Mock provider servers ────────────────────────────────────────────────

type Captured = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// An OpenAI-compatible `/chat/completions` endpoint that records bodies.
async fn mock_openai(reply: &'static str) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/chat/completions",
            post(move |State(seen): State<Captured>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body.clone());
                Json(json!({
                    "model": body["model"],
                    "choices": [{"message": {"role": "assistant", "content": reply}}],
                    "usage": {"prompt_tokens": 120, "completion_tokens": 30, "total_tokens": 150}
                }))
            }),
        )
        .with_state(captured.clone());
    (spawn(router).await, captured)
}

/// An Anthropic-compatible `/v1/messages` endpoint that records bodies.
async fn mock_anthropic(reply: &'static str) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/v1/messages",
            post(move |State(seen): State<Captured>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body.clone());
                Json(json!({
                    "model": body["model"],
                    "content": [{"type": "text", "text": reply}],
                    "usage": {"input_tokens": 120, "output_tokens": 30}
                }))
            }),
        )
        .with_state(captured.clone());
    (spawn(router).await, captured)
}

/// An OpenAI endpoint that rejects every key.
async fn mock_openai_unauthorized() -> String {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"message": "Incorrect API key provided"}})),
            )
        }),
    );
    spawn(router).await
}

// ── Fixtures ─────────────────────────────────────────────────────────────

fn section(path: &str, body: &str) -> String {
    format!(
        "==================== START: {path} ====================\n{body}\n==================== END: {path} ===================="
    )
}

fn bundle_text() -> String {
    [
        "# Web Agent Bundle Instructions".to_string(),
        section(".bmad-core/agent-teams/team-publicradio.yaml", "bundle:\n  name: Public Radio Team"),
        section(".bmad-core/agents/bmad-orchestrator.md", "# Orchestrator\nConnect station staff with specialists."),
        section(".bmad-core/agents/development-director.md", "# Sarah Chen\nLead pledge drives and major gifts."),
        section(".bmad-core/data/donor-psychology.md", "Donors respond to stories."),
        section(".bmad-core/workflows/annual-planning.yaml", "workflow:\n  id: annual-planning"),
        section(".bmad-core/utils/workflow-management.md", "Track workflow state."),
    ]
    .join("\n\n")
}

fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

struct Setup {
    openai_url: String,
    anthropic_url: Option<String>,
    bundle_path: std::path::PathBuf,
    raw_path: std::path::PathBuf,
}

fn app(setup: &Setup) -> Router {
    let mut config = AppConfig::default();
    config.providers.openai.api_key = Some("sk-test".into());
    config.providers.openai.api_url = Some(setup.openai_url.clone());
    if let Some(url) = &setup.anthropic_url {
        config.providers.anthropic.api_key = Some("sk-ant-test".into());
        config.providers.anthropic.api_url = Some(url.clone());
    }
    config.framework.bundle_path = setup.bundle_path.clone();
    config.framework.raw_path = setup.raw_path.clone();

    let state = Arc::new(GatewayState::new(RequestHandler::from_config(&config)));
    build_router(state, None)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

const PLEDGE: &str = "Outline a spring pledge drive for our classical station.";

// ── E2E: Conversation through the gateway ────────────────────────────────

#[tokio::test]
async fn e2e_agent_switch_then_persona_reply() {
    let (openai_url, openai_seen) = mock_openai("Start with a sustainer push.").await;
    let bundle = temp_file(&bundle_text());
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: bundle.path().to_path_buf(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    // Step 1: switch persona; answered locally.
    let (status, json) = post_json(&app, "/api/chat", json!({"content": "*agent development-director"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "command");
    assert_eq!(json["agentId"], "development-director");
    let activation = json["message"].as_str().unwrap().to_string();
    assert!(activation.contains("Sarah Chen"));
    assert!(openai_seen.lock().unwrap().is_empty());

    // Step 2: a real question with history, as the persona.
    let (status, json) = post_json(
        &app,
        "/api/chat",
        json!({
            "content": PLEDGE,
            "agentId": "development-director",
            "station": {"name": "WCLX", "location": "Burlington, VT", "format": "Classical"},
            "messages": [
                {"role": "user", "content": "*agent development-director"},
                {"role": "assistant", "content": activation}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "message");
    assert_eq!(json["content"], "Start with a sustainer push.");
    assert_eq!(json["agentId"], "development-director");

    let seen = openai_seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let body = &seen[0];
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["max_tokens"], 1000);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[2]["role"], "assistant");
    assert_eq!(messages[3]["content"], PLEDGE);

    let system = messages[0]["content"].as_str().unwrap();
    assert!(system.contains("Connect station staff with specialists."));
    assert!(system.contains("Lead pledge drives and major gifts."));
    assert!(system.contains("Donors respond to stories."));
    assert!(!system.contains("id: annual-planning"));
    assert!(system.contains("Station Context: WCLX in Burlington, VT (Classical format)"));
    assert!(system.contains("You are currently acting as Sarah Chen"));
}

#[tokio::test]
async fn e2e_complex_request_carries_workflows() {
    let (openai_url, openai_seen) = mock_openai("Here is a phased plan.").await;
    let bundle = temp_file(&bundle_text());
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: bundle.path().to_path_buf(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    let (status, json) = post_json(
        &app,
        "/api/chat",
        json!({"content": "We need a comprehensive strategy for membership growth with a realistic timeline."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["agentId"], "orchestrator");

    let seen = openai_seen.lock().unwrap();
    let system = seen[0]["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("id: annual-planning"));
    assert!(system.contains("Track workflow state."));
    assert!(system.contains("Station Context: Not provided"));
    assert!(system.ends_with(
        "You are currently acting as the Public Radio Orchestrator. Provide helpful guidance for public radio station management."
    ));
}

#[tokio::test]
async fn e2e_anthropic_uses_separate_system_field() {
    let (openai_url, openai_seen) = mock_openai("unused").await;
    let (anthropic_url, anthropic_seen) = mock_anthropic("From Claude.").await;
    let bundle = temp_file(&bundle_text());
    let app = app(&Setup {
        openai_url,
        anthropic_url: Some(anthropic_url),
        bundle_path: bundle.path().to_path_buf(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    let (status, json) = post_json(
        &app,
        "/api/chat",
        json!({
            "content": PLEDGE,
            "provider": "anthropic",
            "messages": [
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Welcome!"}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"], "From Claude.");
    assert!(openai_seen.lock().unwrap().is_empty());

    let seen = anthropic_seen.lock().unwrap();
    let body = &seen[0];
    assert_eq!(body["model"], "claude-3-sonnet-20240229");
    assert_eq!(body["max_tokens"], 1000);
    assert!(body["system"].as_str().unwrap().contains("Connect station staff with specialists."));

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m["role"] != "system"));
    assert_eq!(messages[0]["content"], "Hello");
    assert_eq!(messages[2]["content"], PLEDGE);
}

#[tokio::test]
async fn e2e_anthropic_without_key_falls_back_to_openai() {
    let (openai_url, openai_seen) = mock_openai("From GPT.").await;
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: "/nonexistent/bundle.txt".into(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    let (status, json) = post_json(&app, "/api/chat", json!({"content": PLEDGE, "provider": "anthropic"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"], "From GPT.");
    assert_eq!(openai_seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn e2e_routed_and_command_requests_stay_local() {
    let (openai_url, openai_seen) = mock_openai("unused").await;
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: "/nonexistent/bundle.txt".into(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    let (_, json) = post_json(&app, "/api/chat", json!({"content": "How do I grow membership?"})).await;
    assert_eq!(json["type"], "orchestrator");
    assert!(json["content"].as_str().unwrap().contains("development-director"));

    let (_, json) = post_json(&app, "/api/chat", json!({"content": "*workflow membership-campaign"})).await;
    assert_eq!(json["type"], "command");
    assert_eq!(json["command"], "workflow");
    assert_eq!(json["args"][0], "membership-campaign");

    let (_, json) = post_json(&app, "/api/chat", json!({"content": "*dance"})).await;
    assert!(json["message"].as_str().unwrap().contains("Unknown command"));

    assert!(openai_seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn e2e_provider_rejection_is_generic_500() {
    let openai_url = mock_openai_unauthorized().await;
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: "/nonexistent/bundle.txt".into(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    let (status, json) = post_json(&app, "/api/chat", json!({"content": PLEDGE})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "Failed to process chat request"}));
}

// ── E2E: Framework fallback chain ────────────────────────────────────────

#[tokio::test]
async fn e2e_raw_file_used_when_bundle_missing() {
    let (openai_url, openai_seen) = mock_openai("ok").await;
    let raw = temp_file("Plain guidance for station managers.");
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: "/nonexistent/bundle.txt".into(),
        raw_path: raw.path().to_path_buf(),
    });

    let (_, preview) = post_json(&app, "/api/context/preview", json!({"content": PLEDGE})).await;
    assert_eq!(preview["metadata"]["tier"], "raw_file");

    post_json(&app, "/api/chat", json!({"content": PLEDGE})).await;
    let seen = openai_seen.lock().unwrap();
    let system = seen[0]["messages"][0]["content"].as_str().unwrap();
    assert!(system.starts_with("Plain guidance for station managers."));
}

#[tokio::test]
async fn e2e_builtin_text_when_nothing_readable() {
    let (openai_url, openai_seen) = mock_openai("ok").await;
    let app = app(&Setup {
        openai_url,
        anthropic_url: None,
        bundle_path: "/nonexistent/bundle.txt".into(),
        raw_path: "/nonexistent/raw.txt".into(),
    });

    let (status, preview) = post_json(
        &app,
        "/api/context/preview",
        json!({"content": PLEDGE, "agentId": "program-director"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["metadata"]["tier"], "builtin");
    assert_eq!(preview["plan"]["tier"], "persona");
    assert_eq!(preview["budget_chars"], 80_000);

    post_json(&app, "/api/chat", json!({"content": PLEDGE, "agentId": "program-director"})).await;
    let seen = openai_seen.lock().unwrap();
    let system = seen[0]["messages"][0]["content"].as_str().unwrap();
    assert!(system.starts_with("# Public Radio Orchestrator (Demo Mode)"));
    assert!(system.contains("Jordan Taylor"));
}
