use bookreview_shared::cancel::unless_cancelled;
use bookreview_shared::{AppRoute, CancelToken};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookReviewApi;
use crate::auth::{expire_session, use_auth};
use crate::components::form::{PageAlert, SubmitButton};
use crate::components::review_form::ReviewForm;
use crate::components::review_form::form_state::ReviewFormState;
use crate::notice::use_notices;
use crate::web::router::{Link, use_router};

const EDIT_REQUIRES_LOGIN: &str = "編集はログインしたユーザーのみ可能です";
const DELETE_CONFIRM: &str = "このレビューを削除します。よろしいですか？";

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_CONFIRM).ok())
        .unwrap_or(false)
}

#[component]
pub fn EditReviewPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let api = expect_context::<BookReviewApi>();
    let back_to = router
        .take_nav_state()
        .return_to
        .unwrap_or(AppRoute::Books);
    let this_route = AppRoute::EditReview(id.clone());

    let state = ReviewFormState::new();
    let can_submit = state.can_submit();
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    // 读取要编辑的书评
    {
        let api = api.clone();
        let id = id.clone();
        let this_route = this_route.clone();
        Effect::new(move |_| {
            let Some(token) = auth.token() else {
                notices.info(EDIT_REQUIRES_LOGIN);
                router.redirect_to_login(this_route.clone());
                return;
            };

            let cancel = CancelToken::new();
            let task_cancel = cancel.clone();
            let api = api.clone();
            let id = id.clone();
            let this_route = this_route.clone();
            spawn_local(async move {
                let Some(result) = unless_cancelled(&task_cancel, api.fetch_review(&id, &token)).await
                else {
                    return;
                };
                match result {
                    Ok(review) => state.fill_from(&review),
                    Err(e) if e.is_auth_failure() => {
                        expire_session(&auth, &router, this_route);
                        return;
                    }
                    Err(e) => {
                        log::warn!("review {} load failed: {}", id, e);
                        page_error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });

            on_cleanup(move || cancel.cancel());
        });
    }

    let on_submit = {
        let api = api.clone();
        let id = id.clone();
        let this_route = this_route.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = state.draft_untracked();
            if submitting.get_untracked() || deleting.get_untracked() || !draft.can_submit() {
                return;
            }
            let Some(token) = auth.token() else {
                notices.info(EDIT_REQUIRES_LOGIN);
                router.redirect_to_login(this_route.clone());
                return;
            };
            page_error.set(None);
            submitting.set(true);

            let api = api.clone();
            let id = id.clone();
            let this_route = this_route.clone();
            spawn_local(async move {
                match api.update_review(&id, draft.to_payload(), &token).await {
                    Ok(()) => {
                        notices.info("レビューを更新しました");
                        router.replace(AppRoute::Books);
                    }
                    Err(e) if e.is_auth_failure() => {
                        expire_session(&auth, &router, this_route);
                    }
                    Err(e) => {
                        log::error!("update review {} failed: {}", id, e);
                        page_error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let on_delete = move |_| {
        if submitting.get_untracked() || deleting.get_untracked() {
            return;
        }
        if auth.token().is_none() {
            notices.info(EDIT_REQUIRES_LOGIN);
            router.redirect_to_login(this_route.clone());
            return;
        }
        if !confirm_delete() {
            return;
        }
        page_error.set(None);
        deleting.set(true);

        let api = api.clone();
        let id = id.clone();
        spawn_local(async move {
            // DELETE 不携带 Authorization
            match api.delete_review(&id).await {
                Ok(()) => {
                    notices.info("レビューを削除しました");
                    router.replace(AppRoute::Books);
                }
                Err(e) => {
                    log::error!("delete review {} failed: {}", id, e);
                    page_error.set(Some(e.user_message()));
                }
            }
            deleting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8 space-y-4">
            <h1 class="text-2xl font-bold">"レビューの編集"</h1>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" novalidate on:submit=on_submit>
                    <PageAlert message=page_error />

                    <Show when=move || !loading.get() fallback=|| view! {
                        <div class="flex justify-center py-6">
                            <span class="loading loading-spinner loading-md"></span>
                        </div>
                    }>
                        <ReviewForm state=state />
                    </Show>

                    <div class="card-actions justify-between items-center mt-6">
                        <Link to=back_to.clone() class="link">"戻る"</Link>
                        <div class="flex gap-2">
                            <button
                                type="button"
                                class="btn btn-outline btn-error"
                                disabled=move || loading.get() || submitting.get() || deleting.get()
                                on:click=on_delete
                            >
                                {move || if deleting.get() { "削除中..." } else { "削除する" }}
                            </button>
                            <SubmitButton
                                label="更新する"
                                busy_label="更新中..."
                                submitting=submitting
                                disabled=Signal::derive(move || loading.get() || deleting.get() || !can_submit.get())
                            />
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
