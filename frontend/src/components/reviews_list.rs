//! 书评列表（公开 / 登录后）
//!
//! 页码来自分页上下文，页码变化时重新请求；上一次未完成的请求通过取消令牌作废。

use bookreview_shared::cancel::unless_cancelled;
use bookreview_shared::pagination::has_next_page;
use bookreview_shared::{AppRoute, CancelToken, ListKind, Review};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookReviewApi;
use crate::auth::{expire_session, use_auth};
use crate::components::form::PageAlert;
use crate::components::paginator::Paginator;
use crate::components::review_card::ReviewCard;
use crate::pagination::use_pagination;
use crate::web::router::{Link, use_router};

fn list_route(kind: ListKind) -> AppRoute {
    match kind {
        ListKind::Public => AppRoute::PublicBooks,
        ListKind::Private => AppRoute::Books,
    }
}

#[component]
fn ReviewsList(kind: ListKind) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let pagination = use_pagination();
    let api = expect_context::<BookReviewApi>();

    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let offset = pagination.counter(kind).offset();
        let token = match (kind, auth.token()) {
            (ListKind::Private, None) => {
                router.redirect_to_login(list_route(kind));
                return;
            }
            (ListKind::Private, token) => token,
            (ListKind::Public, _) => None,
        };

        loading.set(true);
        page_error.set(None);

        let cancel = CancelToken::new();
        let task_cancel = cancel.clone();
        let api = api.clone();
        spawn_local(async move {
            let fetch = api.list_reviews(kind, offset, token.as_deref());
            let Some(result) = unless_cancelled(&task_cancel, fetch).await else {
                return;
            };
            match result {
                Ok(items) => reviews.set(items),
                Err(e) if kind == ListKind::Private && e.is_auth_failure() => {
                    expire_session(&auth, &router, list_route(kind));
                    return;
                }
                Err(e) => {
                    log::warn!("{:?} list at offset {} failed: {}", kind, offset, e);
                    reviews.set(Vec::new());
                    page_error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });

        on_cleanup(move || cancel.cancel());
    });

    let page_label = Signal::derive(move || pagination.counter(kind).label());
    let has_prev = Signal::derive(move || pagination.counter(kind).has_prev_page());
    let has_next = Signal::derive(move || reviews.with(|items| has_next_page(items.len())));
    let is_empty = move || !loading.get() && page_error.with(Option::is_none) && reviews.with(Vec::is_empty);

    view! {
        <div class="space-y-4">
            <PageAlert message=page_error />

            <Show when=move || loading.get() && reviews.with(Vec::is_empty)>
                <div class="flex justify-center py-8 text-base-content/50">
                    <span class="loading loading-spinner loading-md"></span> " 読み込み中..."
                </div>
            </Show>

            <Show when=is_empty>
                <p class="text-center py-8 text-base-content/50">"レビューはまだありません。"</p>
            </Show>

            <ul class="grid gap-4">
                <For
                    each=move || reviews.get()
                    key=|review| review.id.clone()
                    children=move |review| view! { <ReviewCard review=review /> }
                />
            </ul>

            <Paginator
                page_label=page_label
                has_prev=has_prev
                has_next=has_next
                loading=loading
                on_prev=move |_| pagination.prev(kind)
                on_next=move |_| pagination.next(kind)
            />
        </div>
    }
}

/// `/public/books`
#[component]
pub fn ReviewsListPublic() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-2xl font-bold">"書籍レビュー一覧"</h1>
                <div class="flex gap-2">
                    <Link to=AppRoute::Signup class="btn btn-primary btn-sm">"新規登録"</Link>
                    <Link to=AppRoute::Login class="btn btn-outline btn-sm">"ログイン"</Link>
                </div>
            </div>
            <ReviewsList kind=ListKind::Public />
        </div>
    }
}

/// `/books`
#[component]
pub fn ReviewsListPrivate() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-2xl font-bold">"書籍レビュー一覧"</h1>
                <Link to=AppRoute::NewReview class="btn btn-primary btn-sm">"+ 新規レビュー"</Link>
            </div>
            <ReviewsList kind=ListKind::Private />
        </div>
    }
}
