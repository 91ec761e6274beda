/*
 * Responsibility
 * - Handler から見える「抽出済み API key」の型
 *
 * Notes
 * - キーの照合 (保存・失効) は行わない。構文的に正しいことだけを保証する
 * - Debug でキー本体を出さない
 */
use sha2::{Digest, Sha256};

const FINGERPRINT_HEX_LEN: usize = 12;

/// `Authorization` ヘッダから取り出した空でないトークン
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub(super) fn new(token: &str) -> Self {
        Self(token.to_string())
    }

    /// sha256(token) の先頭 12 桁 (hex)。ログや応答でキー本体の代わりに使う
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut hex = hex::encode(digest);
        hex.truncate(FINGERPRINT_HEX_LEN);
        hex
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.fingerprint()).finish()
    }
}
