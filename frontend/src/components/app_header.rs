use bookreview_shared::AppRoute;
use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::notice::use_notices;
use crate::pagination::use_pagination;
use crate::web::router::{Link, use_router};

const DEFAULT_DISPLAY_NAME: &str = "ログイン中";

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let pagination = use_pagination();

    let on_logout = move |_| {
        logout(&auth);
        pagination.reset_all();
        notices.info("ログアウトしました");
        router.replace(AppRoute::PublicBooks);
    };

    view! {
        <header class="navbar bg-base-100 shadow">
            <div class="flex-1">
                <Link to=AppRoute::PublicBooks class="btn btn-ghost text-xl">"書籍レビュー"</Link>
            </div>
            <div class="flex-none gap-2">
                {move || match auth.state.get() {
                    Some(credential) => {
                        let name = credential
                            .display_name
                            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
                        view! {
                            <span class="hidden md:inline text-sm">
                                {format!("ようこそ、{} さん", name)}
                            </span>
                            <Link to=AppRoute::Profile class="btn btn-ghost btn-sm">"プロフィール"</Link>
                            <button class="btn btn-outline btn-sm" on:click=on_logout>
                                "ログアウト"
                            </button>
                        }
                        .into_any()
                    }
                    None => view! {
                        <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"ログイン"</Link>
                        <Link to=AppRoute::Signup class="btn btn-primary btn-sm">"新規登録"</Link>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
