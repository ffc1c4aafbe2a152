use bookreview_shared::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookReviewApi;
use crate::auth::{expire_session, use_auth};
use crate::components::form::{PageAlert, SubmitButton};
use crate::components::review_form::ReviewForm;
use crate::components::review_form::form_state::ReviewFormState;
use crate::notice::use_notices;
use crate::web::router::{Link, use_router};

#[component]
pub fn NewReviewPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let api = expect_context::<BookReviewApi>();

    let state = ReviewFormState::new();
    let can_submit = state.can_submit();
    let page_error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = state.draft_untracked();
        if submitting.get_untracked() || !draft.can_submit() {
            return;
        }
        // 提交时重新读取 token，期间可能已在别处登出
        let Some(token) = auth.token() else {
            router.redirect_to_login(AppRoute::NewReview);
            return;
        };
        page_error.set(None);
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            match api.create_review(draft.to_payload(), &token).await {
                Ok(()) => {
                    notices.info("レビューを登録しました");
                    router.replace(AppRoute::Books);
                }
                Err(e) if e.is_auth_failure() => {
                    expire_session(&auth, &router, AppRoute::NewReview);
                }
                Err(e) => {
                    log::error!("create review failed: {}", e);
                    page_error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8 space-y-4">
            <h1 class="text-2xl font-bold">"新規レビュー"</h1>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" novalidate on:submit=on_submit>
                    <PageAlert message=page_error />
                    <ReviewForm state=state />
                    <div class="card-actions justify-between items-center mt-6">
                        <Link to=AppRoute::Books class="link">"一覧へ戻る"</Link>
                        <SubmitButton
                            label="投稿する"
                            busy_label="投稿中..."
                            submitting=submitting
                            disabled=Signal::derive(move || !can_submit.get())
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
