//! 凭据存储
//!
//! token 和显示名作为两个独立条目保存在持久化键值存储中。
//! token 存在与否是判断"已登录"的唯一依据，客户端不跟踪过期时间。

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
mod tests;

pub const TOKEN_KEY: &str = "token";
pub const USER_NAME_KEY: &str = "userName";

/// 持久化键值存储的抽象
///
/// 浏览器端由 LocalStorage 实现，测试中使用 [`MemoryStore`]。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}

/// 当前登录凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub display_name: Option<String>,
}

/// 凭据读写服务
#[derive(Debug, Clone, Default)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 读取当前凭据；没有 token（或为空串）时视为未登录
    pub fn get(&self) -> Option<Credential> {
        let token = self.token()?;
        Some(Credential {
            token,
            display_name: self.display_name(),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn display_name(&self) -> Option<String> {
        self.store.get(USER_NAME_KEY).filter(|n| !n.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// 保存 token；显示名只在提供时覆盖
    pub fn set(&self, token: &str, display_name: Option<&str>) -> bool {
        let mut ok = self.store.set(TOKEN_KEY, token);
        if let Some(name) = display_name.filter(|n| !n.is_empty()) {
            ok &= self.store.set(USER_NAME_KEY, name);
        }
        log::info!("credential stored (display name: {:?})", display_name);
        ok
    }

    pub fn set_display_name(&self, name: &str) -> bool {
        self.store.set(USER_NAME_KEY, name)
    }

    /// 登出或收到 401/403 时清除两个条目
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_NAME_KEY);
        log::info!("credential cleared");
    }
}

/// 内存实现，用于测试和存储不可用时的兜底
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key).is_some()
    }
}

/// 服务器没有返回用户名时，用邮箱的本地部分作为显示名
pub fn display_name_fallback(email: &str) -> Option<String> {
    let local = email.trim().split('@').next()?;
    if local.is_empty() {
        None
    } else {
        Some(local.to_string())
    }
}
