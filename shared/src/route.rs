//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由，以及守卫（是否渲染或重定向）的判定。

use std::fmt::Display;

use crate::protocol::{decode_segment, encode_segment};

#[cfg(test)]
mod tests;

/// 已登录用户访问登录/注册页时的提示
pub const ALREADY_SIGNED_IN_NOTICE: &str = "ログイン済です";

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 公开书评列表 (默认路由，未匹配的路径也落到这里)
    #[default]
    PublicBooks,
    Signup,
    Login,
    /// 登录后的书评列表
    Books,
    Profile,
    NewReview,
    EditReview(String),
    ReviewDetail(String),
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略查询串、片段和末尾的 `/`；id 段做百分号解码；无法识别的路径解析为 `PublicBooks`。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["public", "books"] => Self::PublicBooks,
            ["signup"] => Self::Signup,
            ["login"] => Self::Login,
            ["books"] => Self::Books,
            ["profile"] => Self::Profile,
            ["new"] => Self::NewReview,
            ["edit", id] => Self::EditReview(decode_segment(id)),
            ["detail", id] => Self::ReviewDetail(decode_segment(id)),
            _ => Self::PublicBooks,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::PublicBooks => "/public/books".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Login => "/login".to_string(),
            Self::Books => "/books".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::NewReview => "/new".to_string(),
            Self::EditReview(id) => format!("/edit/{}", encode_segment(id)),
            Self::ReviewDetail(id) => format!("/detail/{}", encode_segment(id)),
        }
    }

    /// **核心守卫逻辑：定义该路由挂在哪种守卫下**
    pub fn guard(&self) -> Guard {
        match self {
            Self::Books | Self::Profile | Self::NewReview | Self::EditReview(_) => {
                Guard::RequireAuth
            }
            Self::Signup | Self::Login => Guard::GuestOnly,
            Self::PublicBooks | Self::ReviewDetail(_) => Guard::Open,
        }
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 已认证用户离开访客页时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Books
    }

    /// 在给定认证状态下解析本路由
    pub fn resolve(&self, authenticated: bool) -> GuardOutcome {
        evaluate(self.guard(), authenticated, self)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 路由守卫 (Route Guards)
// =========================================================

/// 守卫种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// 任何人都可以访问
    Open,
    /// 未登录时重定向到登录页，并记住原本要去的位置
    RequireAuth,
    /// 已登录时重定向到登录后列表 (登录/注册页)
    GuestOnly,
}

/// 守卫判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(Redirect),
}

/// 重定向指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: AppRoute,
    /// 登录后应返回的位置
    pub from: Option<AppRoute>,
    /// 需要提示给用户的消息
    pub notice: Option<&'static str>,
}

/// 纯函数形式的守卫判定：`(守卫, 认证状态, 目标) -> 渲染 | 重定向`
pub fn evaluate(guard: Guard, authenticated: bool, attempted: &AppRoute) -> GuardOutcome {
    match guard {
        Guard::RequireAuth if !authenticated => GuardOutcome::Redirect(Redirect {
            to: AppRoute::auth_failure_redirect(),
            from: Some(attempted.clone()),
            notice: None,
        }),
        Guard::GuestOnly if authenticated => GuardOutcome::Redirect(Redirect {
            to: AppRoute::auth_success_redirect(),
            from: None,
            notice: Some(ALREADY_SIGNED_IN_NOTICE),
        }),
        _ => GuardOutcome::Render,
    }
}
