use axum::{
    extract::State,
    routing::{get, post},
    Router,
    Json,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Page
        .route("/", get(handlers::index))
        .route("/translate", post(handlers::submit_form))

        // Health check
        .route("/api/health", get(health_check))

        // JSON API
        .route("/api/translate", post(handlers::submit_json))
        .route("/api/translation", get(handlers::last_translation))
}

/// The full application with middleware and state attached
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let translator_config = &state.config.translator_config;
    let model = translator_config
        .llm_configs
        .get(&translator_config.llm_provider)
        .map(|c| c.model.clone());

    Json(json!({
        "status": "ok",
        "provider": translator_config.llm_provider,
        "model": model,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::LlmError;
    use crate::session::SESSION_COOKIE;
    use crate::translate::translator::tests::MockLLM;
    use axum::body::Body;
    use axum::http::{header, Request, Response, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_and_state(replies: Vec<Result<String, LlmError>>) -> (Router, Arc<MockLLM>, AppState) {
        let llm = Arc::new(MockLLM::new(replies));
        let state = AppState::with_llm(Config::default(), llm.clone());
        (build_app(state.clone()), llm, state)
    }

    fn app(replies: Vec<Result<String, LlmError>>) -> (Router, Arc<MockLLM>) {
        let (app, llm, _state) = app_and_state(replies);
        (app, llm)
    }

    fn cookie_of(response: &Response<Body>) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_form(body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/translate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn post_json(body: Value, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/translate")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_cookieless_reads_do_not_create_sessions() {
        let (app, llm, state) = app_and_state(vec![]);

        for _ in 0..50 {
            let response = app.clone().oneshot(get("/", None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().get(header::SET_COOKIE).is_none());
            let html = body_text(response).await;
            assert!(html.contains("Language Translator"));
            assert!(!html.contains("Translated Text"));

            let response = app
                .clone()
                .oneshot(get("/api/translation", None))
                .await
                .unwrap();
            assert!(response.headers().get(header::SET_COOKIE).is_none());
            let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
            assert!(body["translated_text"].is_null());
        }

        assert_eq!(state.sessions.len(), 0);
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_submission_starts_a_session() {
        let (app, _llm, state) = app_and_state(vec![Ok("Bonjour".to_string())]);

        let response = app
            .oneshot(post_form("text=Hello&language=French", None))
            .await
            .unwrap();
        assert!(cookie_of(&response).starts_with(SESSION_COOKIE));
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_reads_do_not_refresh_session_activity() {
        let (app, _llm, state) = app_and_state(vec![Ok("Bonjour".to_string())]);

        let response = app
            .clone()
            .oneshot(post_form("text=Hello&language=French", None))
            .await
            .unwrap();
        let cookie = cookie_of(&response);
        let uid = cookie.split_once('=').unwrap().1.to_string();

        let stale = chrono::Utc::now() - chrono::Duration::hours(2);
        let ctx = state.existing_session(Some(&uid)).unwrap();
        ctx.lock().await.last_active = stale;
        drop(ctx);

        app.clone().oneshot(get("/", Some(&cookie))).await.unwrap();
        app.oneshot(get("/api/translation", Some(&cookie))).await.unwrap();

        let ctx = state.existing_session(Some(&uid)).unwrap();
        assert_eq!(ctx.lock().await.last_active, stale);
        drop(ctx);
        assert_eq!(state.sweep_idle_sessions(chrono::Duration::hours(1)), 1);
    }

    #[tokio::test]
    async fn test_form_submission_is_remembered_per_session() {
        let (app, llm) = app(vec![Ok("Bonjour".to_string())]);

        let response = app
            .clone()
            .oneshot(post_form("text=Hello&language=French", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = cookie_of(&response);
        let html = body_text(response).await;
        assert!(html.contains("Bonjour"));
        assert!(html.contains(">Hello</textarea>"));
        assert_eq!(llm.call_count(), 1);

        // Re-render in the same session keeps the result without a new request
        let response = app.clone().oneshot(get("/", Some(&cookie))).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_text(response).await.contains("Bonjour"));

        // Another browser sees nothing
        let response = app.oneshot(get("/", None)).await.unwrap();
        assert!(!body_text(response).await.contains("Bonjour"));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_form_submission_is_ignored() {
        let (app, llm) = app(vec![Ok("Bonjour".to_string())]);

        let response = app
            .oneshot(post_form("text=+++&language=French", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("Translated Text"));
        assert!(!html.contains("Translation failed"));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_previous_result() {
        let (app, _llm) = app(vec![
            Ok("Bonjour".to_string()),
            Err(LlmError::RateLimited("slow down".to_string())),
        ]);

        let response = app
            .clone()
            .oneshot(post_form("text=Hello&language=French", None))
            .await
            .unwrap();
        let cookie = cookie_of(&response);

        let response = app
            .oneshot(post_form("text=Goodbye&language=French", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_text(response).await;
        assert!(html.contains("Translation failed: provider rate limit reached: slow down"));
        assert!(html.contains("Bonjour"));
    }

    #[tokio::test]
    async fn test_json_api() {
        let (app, llm) = app(vec![
            Ok("Hola".to_string()),
            Err(LlmError::Unauthorized("Invalid API Key".to_string())),
        ]);

        let response = app
            .clone()
            .oneshot(post_json(json!({"text": "Hello", "language": "Spanish"}), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = cookie_of(&response);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({"status": "translated", "translated_text": "Hola"}));

        let response = app
            .clone()
            .oneshot(post_json(json!({"text": "Hello", "language": ""}), Some(&cookie)))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({"status": "ignored", "translated_text": null}));
        assert_eq!(llm.call_count(), 1);

        let response = app
            .clone()
            .oneshot(post_json(json!({"text": "Bye", "language": "Spanish"}), Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("Invalid API Key"));

        let response = app
            .oneshot(get("/api/translation", Some(&cookie)))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["translated_text"], "Hola");
        assert_eq!(body["target_language"], "Spanish");
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _llm) = app(vec![]);
        let response = app.oneshot(get("/api/health", None)).await.unwrap();
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["provider"], "groq_llm");
        assert_eq!(body["model"], "llama-3.1-8b-instant");
    }
}
