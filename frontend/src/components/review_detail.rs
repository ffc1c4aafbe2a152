use bookreview_shared::cancel::unless_cancelled;
use bookreview_shared::{AppRoute, CancelToken, Review};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookReviewApi;
use crate::auth::use_auth;
use crate::components::form::PageAlert;
use crate::web::router::{Link, NavState, use_router};

const EMPTY_FIELD: &str = "（未入力）";

/// 书评正文区域
#[component]
fn ReviewArticle(review: Review) -> impl IntoView {
    let edit_link = review.is_mine.then(|| {
        let id = review.id.clone();
        view! {
            <Link
                to=AppRoute::EditReview(id.clone())
                state=NavState::return_to(AppRoute::ReviewDetail(id))
                class="btn btn-outline btn-sm"
            >
                "編集する"
            </Link>
        }
    });

    view! {
        <article class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-3">
                <div class="flex items-start justify-between gap-4">
                    <h1 class="card-title text-2xl">{review.display_title()}</h1>
                    {edit_link}
                </div>
                {review.reviewer_name().map(|name| view! {
                    <p class="text-sm text-base-content/70">"レビュアー: " {name.to_string()}</p>
                })}
                {review.link().map(|url| view! {
                    <a href=url.to_string() target="_blank" rel="noopener noreferrer" class="link link-primary break-all">
                        {url.to_string()}
                    </a>
                })}
                <section>
                    <h2 class="font-semibold">"書籍の詳細"</h2>
                    <p class="whitespace-pre-wrap">{review.detail_text().unwrap_or(EMPTY_FIELD).to_string()}</p>
                </section>
                <section>
                    <h2 class="font-semibold">"レビュー"</h2>
                    <p class="whitespace-pre-wrap">{review.review_text().unwrap_or(EMPTY_FIELD).to_string()}</p>
                </section>
            </div>
        </article>
    }
}

/// 详情页：先显示列表传来的预览，再用接口结果覆盖
#[component]
pub fn ReviewDetailPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = expect_context::<BookReviewApi>();

    let preview = router.take_nav_state().preview.filter(|r| r.id == id);
    let back_to = if auth.token().is_some() {
        AppRoute::Books
    } else {
        AppRoute::PublicBooks
    };
    let review = RwSignal::new(preview);
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let token = auth.token();
        let cancel = CancelToken::new();
        let task_cancel = cancel.clone();
        let api = api.clone();
        let id = id.clone();
        spawn_local(async move {
            let fetch = api.fetch_review_detail(&id, token.as_deref());
            let Some(result) = unless_cancelled(&task_cancel, fetch).await else {
                return;
            };
            match result {
                Ok(fresh) => review.set(Some(fresh)),
                Err(e) => {
                    log::warn!("review {} detail failed: {}", id, e);
                    page_error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });

        on_cleanup(move || cancel.cancel());
    });

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-4">
            <Link to=back_to class="link">"← 一覧へ戻る"</Link>

            <Show when=move || !loading.get()>
                <PageAlert message=page_error />
            </Show>

            {move || review.get().map(|r| view! { <ReviewArticle review=r /> })}

            <Show when=move || loading.get()>
                <div class="flex justify-center py-6">
                    <span class="loading loading-spinner loading-md"></span>
                </div>
            </Show>
        </div>
    }
}
