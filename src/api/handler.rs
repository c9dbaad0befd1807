//! API Lambda handler - thin router in front of the dashboard.
//!
//! This module handles:
//! - Health checks and logout (not session-guarded)
//! - Session verification for every other route
//! - Trending aggregation + summary (`/trending`)
//! - Free-form research questions (`/ask`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::core::models::Region;
use crate::dashboard::Dashboard;
use crate::session::GuardDecision;
use crate::views;

pub const DEFAULT_TOPIC: &str = "india pak war 1971";
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error for malformed requests; those become 4xx bodies.
#[tracing::instrument(level = "info", skip(app, event))]
pub async fn function_handler(app: &Dashboard, event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(route(app, &event.payload).await)
}

/// Dispatches one HTTP API event and builds the response payload.
pub async fn route(app: &Dashboard, payload: &Value) -> Value {
    let request_id = Uuid::new_v4();
    let path = parsing::request_path(payload);
    let method = parsing::request_method(payload);
    info!(%request_id, %method, raw_path = %path, "Dashboard request");

    // ========================================================================
    // Unguarded routes
    // ========================================================================

    if path.ends_with("/health") {
        return helpers::ok_json(&json!({ "ok": true }));
    }

    let credential = parsing::session_credential(payload);

    if path.ends_with("/logout") {
        if let Err(e) = app.guard().logout(credential.as_deref()).await {
            warn!("Logout at session authority failed: {}", e);
        }
        return helpers::redirect_clearing_session(app.guard().login_url());
    }

    let is_trending = path.ends_with("/trending");
    let is_ask = path.ends_with("/ask");
    if !is_trending && !is_ask {
        return helpers::err_response(404, "Not found");
    }
    if method != "GET" && method != "POST" {
        return helpers::err_response(405, "Method not allowed");
    }

    // ========================================================================
    // Session check
    // ========================================================================

    match app.guard().check(credential.as_deref()).await {
        GuardDecision::Allow => {}
        GuardDecision::Redirect(url) => return helpers::redirect(&url),
        GuardDecision::Deny(message) => return helpers::err_response(503, &message),
    }

    let body = match parsing::json_body(payload) {
        Ok(b) => b,
        Err(e) => {
            error!("Request body parse error: {}", e);
            return helpers::err_response(400, &format!("Parse Error: {e}"));
        }
    };

    if is_trending {
        handle_trending(app, payload, &body).await
    } else {
        handle_ask(app, payload, &body).await
    }
}

async fn handle_trending(app: &Dashboard, payload: &Value, body: &Value) -> Value {
    let topic = parsing::request_param(payload, body, "topic")
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let region = match parsing::request_param(payload, body, "region") {
        Some(raw) => match raw.parse::<Region>() {
            Ok(r) => r,
            Err(e) => return helpers::err_response(400, &e),
        },
        None => Region::default(),
    };

    info!(topic = %topic, region = %region, "Fetching trending videos");
    let result = app.aggregator().aggregate(&topic, region).await;
    if result.is_empty() {
        return helpers::ok_json(&views::trending_json(&result, None));
    }

    let summary = app
        .generator()
        .summarize(&result.joined_text, &result.title_list)
        .await;
    helpers::ok_json(&views::trending_json(&result, Some(&summary)))
}

async fn handle_ask(app: &Dashboard, payload: &Value, body: &Value) -> Value {
    let query = parsing::request_param(payload, body, "query").unwrap_or_default();
    if query.trim().is_empty() {
        return helpers::err_response(400, EMPTY_QUESTION_MESSAGE);
    }

    let answer = app.generator().answer(&query).await;
    helpers::ok_json(&json!({ "answer": answer }))
}
