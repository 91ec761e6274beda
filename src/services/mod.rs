/*
 * Responsibility
 * - HTTP に依存しないドメインロジック
 * - handler / extractor からはここを呼ぶ
 */
pub mod auth;
