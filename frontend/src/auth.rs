//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! LocalStorage 中的 token 是唯一的事实来源，信号只负责通知界面刷新；
//! 路由服务通过注入的认证信号来检查认证状态。

use bookreview_shared::{AppRoute, Credential, CredentialStore};
use leptos::prelude::*;

use crate::web::BrowserStorage;
use crate::web::router::RouterService;

fn credential_store() -> CredentialStore<BrowserStorage> {
    CredentialStore::new(BrowserStorage)
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前凭据的镜像（只读）
    pub state: ReadSignal<Option<Credential>>,
    /// 设置凭据镜像（写入）
    set_state: WriteSignal<Option<Credential>>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(None);
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    ///
    /// 订阅镜像信号，但判定时总是重新读取存储。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.track();
            credential_store().is_authenticated()
        })
    }

    /// 发请求前读取最新 token
    pub fn token(&self) -> Option<String> {
        credential_store().token()
    }

    /// 从存储刷新镜像
    fn sync(&self) {
        self.set_state.set(credential_store().get());
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// 初始化认证状态（从 LocalStorage 加载）
pub fn init_auth(ctx: &AuthContext) {
    ctx.sync();
    log::debug!(
        "auth initialized (signed in: {})",
        ctx.state.get_untracked().is_some()
    );
}

/// 登录/注册成功后保存凭据
pub fn sign_in(ctx: &AuthContext, token: &str, display_name: Option<&str>) {
    credential_store().set(token, display_name);
    ctx.sync();
}

/// 只更新显示名（资料编辑后）
pub fn set_display_name(ctx: &AuthContext, name: &str) {
    credential_store().set_display_name(name);
    ctx.sync();
}

/// 注销并清除状态
pub fn logout(ctx: &AuthContext) {
    credential_store().clear();
    ctx.sync();
}

/// 受保护的请求返回 401/403：清除凭据并带着返回位置跳转登录页
pub fn expire_session(ctx: &AuthContext, router: &RouterService, from: AppRoute) {
    log::info!("session rejected by server, redirecting to login (from {})", from);
    logout(ctx);
    router.redirect_to_login(from);
}
