//! 书评前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），路由定义与守卫在 `bookreview_shared::route`
//! - `auth`: 认证状态管理
//! - `pagination` / `notice`: 分页与提示的全局状态
//! - `api`: REST 接口
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod app_header;
    pub mod edit_review;
    mod form;
    pub mod login;
    pub mod new_review;
    pub mod notice_toast;
    mod paginator;
    pub mod profile;
    mod review_card;
    pub mod review_detail;
    mod review_form;
    pub mod reviews_list;
    pub mod signup;
}
pub mod config;
mod notice;
mod pagination;

use crate::auth::{AuthContext, init_auth};
use crate::components::app_header::AppHeader;
use crate::components::edit_review::EditReviewPage;
use crate::components::login::LoginPage;
use crate::components::new_review::NewReviewPage;
use crate::components::notice_toast::NoticeToast;
use crate::components::profile::ProfilePage;
use crate::components::review_detail::ReviewDetailPage;
use crate::components::reviews_list::{ReviewsListPrivate, ReviewsListPublic};
use crate::components::signup::SignupPage;
use crate::config::AppConfig;
use crate::notice::NoticeContext;
use crate::pagination::PaginationContext;

use bookreview_shared::AppRoute;
use leptos::prelude::*;

// 浏览器 Web API 封装模块
// 存储、HTTP、图片压缩与路由都集中在这里，组件层不直接接触 web_sys 的细节。
pub(crate) mod web {
    mod http;
    mod image;
    pub mod router;
    mod storage;

    pub use http::{HttpBody, HttpClient, HttpResponse};
    pub use image::compress_image;
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::PublicBooks => view! { <ReviewsListPublic /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Books => view! { <ReviewsListPrivate /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NewReview => view! { <NewReviewPage /> }.into_any(),
        AppRoute::EditReview(id) => view! { <EditReviewPage id=id /> }.into_any(),
        AppRoute::ReviewDetail(id) => view! { <ReviewDetailPage id=id /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 配置与 API 客户端
    provide_context(config.api());
    let notices = NoticeContext::new(config.notice_ms);
    provide_context(notices);
    provide_context(PaginationContext::new());
    provide_context(config);

    // 2. 创建认证上下文，并从 LocalStorage 加载凭据
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated notices=notices>
            <div class="min-h-screen bg-base-200 font-sans">
                <AppHeader />
                <NoticeToast />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
