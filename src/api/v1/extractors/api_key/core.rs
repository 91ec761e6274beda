use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::get_api_key;

use super::ApiKey;

/// Handler で ApiKey を受け取るための extractor
/// ヘッダが無い・形式が違う場合は 401 (AppError) を返す
pub struct ApiKeyExtractor(pub ApiKey);

impl<S> FromRequestParts<S> for ApiKeyExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(token) => Ok(Self(ApiKey::new(token))),
            Err(err) => {
                // ヘッダ値そのものはログに出さない
                tracing::warn!(error = %err, path = %parts.uri.path(), "api key rejected");
                Err(err.into())
            }
        }
    }
}
