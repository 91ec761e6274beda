//! `Authorization: ApiKey <token>` からトークンを取り出す
//!
//! 構文だけを見る。キーが正しいかどうか（保存・照合）はここの責務ではない。
//! 呼び出し側 (extractor) が HTTP ステータスへの変換とログ出力を行う。

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Scheme prefix, including the single separating space.
pub const API_KEY_SCHEME: &str = "ApiKey ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Returns the token following `ApiKey ` in the first `Authorization` header.
///
/// - header absent or empty: [`AuthError::NoAuthHeader`]
/// - wrong scheme, non-text value, or nothing after the prefix:
///   [`AuthError::MalformedHeader`]
///
/// The scheme is matched case-sensitively and the token is returned verbatim.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::NoAuthHeader)?;

    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    match value.strip_prefix(API_KEY_SCHEME) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
