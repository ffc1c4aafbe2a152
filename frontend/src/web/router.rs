//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程："解析 -> 守卫判定 -> 渲染 | 重定向"，守卫本身是共享层的纯函数。

use bookreview_shared::{AppRoute, GuardOutcome, Review};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::notice::NoticeContext;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 随一次导航传递的一次性数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    /// 登录后应返回的位置
    pub from: Option<AppRoute>,
    /// 编辑页"返回"链接的目标
    pub return_to: Option<AppRoute>,
    /// 详情页在正式请求完成前先行显示的内容
    pub preview: Option<Review>,
}

impl NavState {
    pub fn from(route: AppRoute) -> Self {
        Self {
            from: Some(route),
            ..Self::default()
        }
    }

    pub fn return_to(route: AppRoute) -> Self {
        Self {
            return_to: Some(route),
            ..Self::default()
        }
    }

    pub fn preview(review: Review) -> Self {
        Self {
            preview: Some(review),
            ..Self::default()
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 目标视图挂载时取走的导航数据
    nav_state: StoredValue<NavState>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    notices: NoticeContext,
}

impl RouterService {
    /// 创建新的路由服务，并对初始 URL 执行一次守卫判定
    fn new(is_authenticated: Signal<bool>, notices: NoticeContext) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        let router = Self {
            current_route,
            set_route,
            nav_state: StoredValue::new(NavState::default()),
            is_authenticated,
            notices,
        };

        let path = current_path();
        router.navigate_to_route(AppRoute::from_path(&path), NavState::default(), false);
        router
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 取走本次导航携带的数据（只能取一次）
    pub fn take_nav_state(&self) -> NavState {
        let mut taken = NavState::default();
        self.nav_state
            .update_value(|state| taken = std::mem::take(state));
        taken
    }

    /// 导航到指定路由（pushState）
    pub fn navigate(&self, route: AppRoute) {
        self.navigate_to_route(route, NavState::default(), true);
    }

    /// 携带导航数据跳转
    pub fn navigate_with(&self, route: AppRoute, state: NavState) {
        self.navigate_to_route(route, state, true);
    }

    /// 替换当前历史记录跳转（提交成功后回列表等）
    pub fn replace(&self, route: AppRoute) {
        self.navigate_to_route(route, NavState::default(), false);
    }

    /// 跳转登录页并记住返回位置
    pub fn redirect_to_login(&self, from: AppRoute) {
        self.navigate_to_route(AppRoute::auth_failure_redirect(), NavState::from(from), false);
    }

    /// **核心方法：导航与守卫**
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `state` - 交给目标视图的导航数据
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, state: NavState, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        let (route, state) = match target_route.resolve(is_auth) {
            GuardOutcome::Render => (target_route, state),
            GuardOutcome::Redirect(redirect) => {
                log::info!("[Router] {} -> {} (authenticated: {})", target_route, redirect.to, is_auth);
                if let Some(notice) = redirect.notice {
                    self.notices.info(notice);
                }
                (redirect.to, NavState { from: redirect.from, ..NavState::default() })
            }
        };

        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.nav_state.set_value(state);
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑，重定向用 replaceState
            router.navigate_to_route(target_route, NavState::default(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, notices: NoticeContext) -> RouterService {
    let router = RouterService::new(is_authenticated, notices);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 守卫重定向时的提示出口
    notices: NoticeContext,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, notices);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。路由每次变化都会重新挂载视图。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接
///
/// 普通点击走路由服务；带修饰键的点击交给浏览器（新标签页等）。
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    /// 随导航传递的数据
    #[prop(optional)]
    state: Option<NavState>,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.navigate_with(to.clone(), state.clone().unwrap_or_default());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
