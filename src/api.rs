//! HTTP front-end for the battery.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Json},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{validate_key, ValidationRequest, ValidationResponse};

#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_date: &'static str,
}

/// Build the service router. Serve it with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn router() -> Router {
    Router::new()
        .route("/api/validate", post(validate_handler))
        .route("/api/health", get(health_handler))
        .route("/api/version", get(version_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        git_date: env!("GIT_DATE"),
    })
}

async fn validate_handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ValidationRequest>,
) -> (StatusCode, Json<ValidationResponse>) {
    let client_ip = extract_client_ip(&headers, addr);
    info!(
        "Validation request received: ip={}, format={:?}, {} characters",
        client_ip,
        payload.input_format,
        payload.key.len()
    );

    let response = validate_key(&payload);

    let status = if response.result.is_some() {
        if response.valid {
            info!("Key passed: request_id={}", response.request_id);
        } else {
            warn!(
                "Key failed: request_id={}, {}",
                response.request_id, response.message
            );
        }
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    (status, Json(response))
}

/// Extract real client IP from headers (considering proxies) or fallback to socket address
fn extract_client_ip(headers: &HeaderMap, addr: SocketAddr) -> String {
    if let Some(forwarded_for) = headers.get("x-forwarded-for") {
        if let Ok(value) = forwarded_for.to_str() {
            // X-Forwarded-For can contain multiple IPs, take the first one
            if let Some(ip) = value.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip") {
        if let Ok(value) = real_ip.to_str() {
            return value.to_string();
        }
    }

    addr.ip().to_string()
}
