//! LocalStorage 封装模块
//!
//! 通过 `gloo-storage` 取得浏览器 LocalStorage，按原样读写字符串，
//! 并实现共享层的 `KeyValueStore`，让凭据读写逻辑与浏览器解耦。
//! 不经过 gloo 的 JSON 编码：`token`/`userName` 以纯文本保存。

use bookreview_shared::KeyValueStore;
use gloo_storage::{LocalStorage, Storage};

/// 浏览器本地存储
///
/// 读取失败（键不存在或存储不可用）时视为不存在。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match LocalStorage::raw().set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("LocalStorage.setItem({}) failed: {:?}", key, e);
                false
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
