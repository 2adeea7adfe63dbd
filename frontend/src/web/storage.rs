//! 浏览器存储封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `KeyValueStore`。

use charger_club::KeyValueStore;

/// 浏览器存储
///
/// `Local` 跨刷新持久保存，`Session` 随标签页关闭而清除。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStorage {
    Local,
    Session,
}

impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            BrowserStorage::Local => window.local_storage().ok()?,
            BrowserStorage::Session => window.session_storage().ok()?,
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        self.storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
