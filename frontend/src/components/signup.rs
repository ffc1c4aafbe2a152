use bookreview_shared::validation::{FieldErrors, SignupForm, signup_failure, validate_avatar};
use bookreview_shared::{AppRoute, ListKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement, Url};

use crate::api::BookReviewApi;
use crate::auth::{sign_in, use_auth};
use crate::components::form::{FieldError, PageAlert, SubmitButton, invalid_flag};
use crate::notice::use_notices;
use crate::pagination::use_pagination;
use crate::web::compress_image;
use crate::web::router::{Link, use_router};

/// 压缩并上传头像；失败只提示，不影响已经创建好的账号
async fn upload_avatar(api: &BookReviewApi, file: &File, token: &str) -> Result<(), String> {
    let compressed = compress_image(file).await;
    match api.upload_icon(&compressed, token).await {
        Ok(resp) => {
            log::info!(
                "avatar uploaded ({})",
                resp.and_then(|r| r.icon_url).unwrap_or_default()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("avatar upload failed: {}", e);
            Err(e.user_message())
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let pagination = use_pagination();
    let api = expect_context::<BookReviewApi>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let avatar = RwSignal::new_local(Option::<File>::None);
    let preview_url = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(FieldErrors::new());
    let page_error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let revoke_preview = move || {
        if let Some(url) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
        preview_url.set(None);
    };
    on_cleanup(revoke_preview);

    let on_avatar_change = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|list| list.get(0));
        revoke_preview();
        errors.update(|e| e.remove("avatar"));

        if let Some(file) = &file {
            if let Err(message) = validate_avatar(file.size(), &file.type_()) {
                errors.update(|e| e.insert("avatar", message));
            }
            preview_url.set(Url::create_object_url_with_blob(file).ok());
        }
        avatar.set(file);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let file = avatar.get_untracked();
        let avatar_error = file
            .as_ref()
            .and_then(|f| validate_avatar(f.size(), &f.type_()).err());

        let req = match (form.validate(), avatar_error) {
            (Ok(req), None) => req,
            (result, avatar_error) => {
                let mut field_errors = result.err().unwrap_or_default();
                if let Some(message) = avatar_error {
                    field_errors.insert("avatar", message);
                }
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        page_error.set(None);
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let session = api.create_user(&req).await.and_then(|resp| resp.into_session());
            let token = match session {
                Ok((token, _)) => token,
                Err(e) => {
                    log::error!("signup failed: {}", e);
                    let (field_errors, message) = signup_failure(&e);
                    errors.set(field_errors);
                    page_error.set(message);
                    submitting.set(false);
                    return;
                }
            };

            sign_in(&auth, &token, Some(&req.name));
            pagination.set_page(ListKind::Private, 0);

            if let Some(file) = file {
                if let Err(message) = upload_avatar(&api, &file, &token).await {
                    notices.error(format!("アイコンのアップロードに失敗しました: {}", message));
                }
            }

            notices.info("登録が完了しました");
            submitting.set(false);
            router.navigate(AppRoute::auth_success_redirect());
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"新規登録"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" novalidate on:submit=on_submit>
                        <PageAlert message=page_error />

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"ユーザー名"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                autocomplete="nickname"
                                aria-invalid=invalid_flag(errors, "name")
                                aria-describedby="name-error"
                                on:input=move |ev| name.set(event_target_value(&ev))
                                prop:value=move || name.get()
                                class="input input-bordered"
                            />
                            <FieldError errors=errors field="name" />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"メールアドレス"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="email"
                                aria-invalid=invalid_flag(errors, "email")
                                aria-describedby="email-error"
                                on:input=move |ev| email.set(event_target_value(&ev))
                                prop:value=move || email.get()
                                class="input input-bordered"
                            />
                            <FieldError errors=errors field="email" />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"パスワード"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="new-password"
                                aria-invalid=invalid_flag(errors, "password")
                                aria-describedby="password-error"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=move || password.get()
                                class="input input-bordered"
                            />
                            <FieldError errors=errors field="password" />
                        </div>
                        <div class="form-control">
                            <label class="label" for="avatar">
                                <span class="label-text">"アイコン画像（任意）"</span>
                            </label>
                            <input
                                id="avatar"
                                type="file"
                                accept="image/*"
                                aria-invalid=invalid_flag(errors, "avatar")
                                aria-describedby="avatar-error"
                                on:change=on_avatar_change
                                class="file-input file-input-bordered w-full"
                            />
                            <FieldError errors=errors field="avatar" />
                            {move || preview_url.get().map(|src| view! {
                                <div class="avatar mt-3">
                                    <div class="w-20 rounded-full">
                                        <img src=src alt="アイコンのプレビュー" />
                                    </div>
                                </div>
                            })}
                        </div>
                        <div class="form-control mt-6">
                            <SubmitButton label="登録する" busy_label="登録中..." submitting=submitting />
                        </div>
                        <p class="text-sm text-center mt-2">
                            "すでにアカウントをお持ちの方は "
                            <Link to=AppRoute::Login class="link link-primary">"ログイン"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
