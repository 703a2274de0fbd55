//! LocalStorage 令牌存储
//!
//! 令牌以原始字符串保存（不做 JSON 编码），与服务器签发的格式一致。

use gloo_storage::{LocalStorage, Storage};
use medicitas::storage::TokenStore;

pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        if LocalStorage::raw().set_item(&self.key, token).is_err() {
            tracing::warn!(key = %self.key, "failed to persist token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
