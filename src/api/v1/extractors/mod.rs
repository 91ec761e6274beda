/*
 * Responsibility
 * - handler が受け取る extractor の公開
 */
mod api_key;

pub use api_key::ApiKeyExtractor;
