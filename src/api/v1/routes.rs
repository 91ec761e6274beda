/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - ApiKey が必要な route は handler 側で ApiKeyExtractor を受けることで表現する
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, ping::ping};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ping", get(ping))
}
