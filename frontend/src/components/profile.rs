use bookreview_shared::cancel::unless_cancelled;
use bookreview_shared::validation::{FieldErrors, ProfileForm};
use bookreview_shared::{AppRoute, CancelToken};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookReviewApi;
use crate::auth::{expire_session, set_display_name, use_auth};
use crate::components::form::{FieldError, PageAlert, SubmitButton, invalid_flag};
use crate::notice::use_notices;
use crate::web::router::{Link, use_router};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let api = expect_context::<BookReviewApi>();

    let name = RwSignal::new(String::new());
    let icon_url = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(true);
    let errors = RwSignal::new(FieldErrors::new());
    let page_error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    // 挂载时读取当前资料
    let load_api = api.clone();
    Effect::new(move |_| {
        let Some(token) = auth.token() else {
            router.redirect_to_login(AppRoute::Profile);
            return;
        };

        let cancel = CancelToken::new();
        let task_cancel = cancel.clone();
        let api = load_api.clone();
        spawn_local(async move {
            let Some(result) = unless_cancelled(&task_cancel, api.fetch_profile(&token)).await else {
                return;
            };
            match result {
                Ok(profile) => {
                    name.set(profile.name.unwrap_or_default());
                    icon_url.set(profile.icon_url);
                }
                Err(e) if e.is_auth_failure() => {
                    expire_session(&auth, &router, AppRoute::Profile);
                    return;
                }
                Err(e) => {
                    log::warn!("profile load failed: {}", e);
                    page_error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });

        on_cleanup(move || cancel.cancel());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let req = match (ProfileForm { name: name.get_untracked() }).validate() {
            Ok(req) => req,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        let Some(token) = auth.token() else {
            router.redirect_to_login(AppRoute::Profile);
            return;
        };
        errors.set(FieldErrors::new());
        page_error.set(None);
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            match api.update_profile(&req, &token).await {
                Ok(()) => {
                    set_display_name(&auth, &req.name);
                    notices.info("ユーザー情報を更新しました");
                    router.navigate(AppRoute::Books);
                }
                Err(e) if e.is_auth_failure() => {
                    expire_session(&auth, &router, AppRoute::Profile);
                }
                Err(e) => {
                    log::error!("profile update failed: {}", e);
                    page_error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto p-4 md:p-8 space-y-4">
            <h1 class="text-2xl font-bold">"ユーザー情報の編集"</h1>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" novalidate on:submit=on_submit>
                    <PageAlert message=page_error />

                    <Show when=move || !loading.get() fallback=|| view! {
                        <div class="flex justify-center py-6">
                            <span class="loading loading-spinner loading-md"></span>
                        </div>
                    }>
                        {move || icon_url.get().map(|src| view! {
                            <div class="avatar">
                                <div class="w-20 rounded-full">
                                    <img src=src alt="アイコン" />
                                </div>
                            </div>
                        })}
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"ユーザー名"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                aria-invalid=invalid_flag(errors, "name")
                                aria-describedby="name-error"
                                on:input=move |ev| name.set(event_target_value(&ev))
                                prop:value=move || name.get()
                                class="input input-bordered"
                            />
                            <FieldError errors=errors field="name" />
                        </div>
                    </Show>

                    <div class="card-actions justify-between items-center mt-6">
                        <Link to=AppRoute::Books class="link">"戻る"</Link>
                        <SubmitButton
                            label="更新する"
                            busy_label="更新中..."
                            submitting=submitting
                            disabled=Signal::derive(move || loading.get())
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
