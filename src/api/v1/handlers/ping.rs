/*
 * Responsibility
 * - GET /ping (ApiKey が必要な疎通用)
 * - キー本体は返さず fingerprint のみ返す
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyExtractor;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub key_fingerprint: String,
}

pub async fn ping(ApiKeyExtractor(key): ApiKeyExtractor) -> Json<PingResponse> {
    tracing::debug!(key = ?key, "authorized ping");

    Json(PingResponse {
        status: "ok",
        key_fingerprint: key.fingerprint(),
    })
}
