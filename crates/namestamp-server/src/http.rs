//! Router and handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::SecondsFormat;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use namestamp_core::Plan;
use namestamp_engine::StampEngine;

const MISSING_NAME: &str = "Missing 'name' query param";

/// Successful response body, one field per Plan component.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanBody<'a> {
    ok: bool,
    input: &'a str,
    effective_name: &'a str,
    category: &'a str,
    category_key: &'a str,
    category_index: usize,
    slot: u32,
    offset_seconds: i64,
    payload_used: &'a str,
    iso_local: &'a str,
    #[serde(rename = "isoUTC")]
    iso_utc: String,
    epoch_millis: i64,
}

impl<'a> PlanBody<'a> {
    fn from_plan(plan: &'a Plan) -> Self {
        PlanBody {
            ok: true,
            input: &plan.input,
            effective_name: &plan.effective_name,
            category: &plan.category,
            category_key: &plan.category_key,
            category_index: plan.category_index,
            slot: plan.slot,
            offset_seconds: plan.offset_seconds,
            payload_used: &plan.payload_used,
            iso_local: &plan.iso_local,
            iso_utc: plan.instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            epoch_millis: plan.epoch_millis,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: &'static str,
}

/// Build the application router around a shared engine.
pub fn router(engine: Arc<StampEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/stamp", get(stamp))
        .layer(cors)
        .with_state(engine)
}

/// GET /api/stamp?name=...
///
/// A missing or empty `name` is a usage error reported by this layer; the
/// engine is not invoked for it.
pub async fn stamp(
    State(engine): State<Arc<StampEngine>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(name) = params.get("name").filter(|n| !n.is_empty()) else {
        return json_response(
            StatusCode::BAD_REQUEST,
            &ErrorBody {
                ok: false,
                error: MISSING_NAME,
            },
        );
    };

    let plan = engine.plan(name);
    tracing::debug!(
        input = %plan.input,
        category = %plan.category_key,
        slot = plan.slot,
        "stamp assigned"
    );
    json_response(StatusCode::OK, &PlanBody::from_plan(&plan))
}

/// Pretty-printed JSON with explicit content type and caching disabled.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let text = serde_json::to_string_pretty(body).unwrap_or_else(|e| {
        tracing::warn!("response serialization failed: {}", e);
        "{}".to_string()
    });

    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            ),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store, max-age=0"),
            ),
        ],
        text,
    )
        .into_response()
}
