/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 認証は extractor (api::v1::extractors::ApiKey) 側で行うため、ここは横断的な HTTP 層のみ
 */
pub mod http;
