use bookreview_shared::credential::display_name_fallback;
use bookreview_shared::protocol::SigninRequest;
use bookreview_shared::validation::{FieldErrors, LoginForm};
use bookreview_shared::{ApiResult, AppRoute, ListKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookReviewApi;
use crate::auth::{sign_in, use_auth};
use crate::components::form::{FieldError, PageAlert, SubmitButton, invalid_flag};
use crate::notice::use_notices;
use crate::pagination::use_pagination;
use crate::web::router::{Link, use_router};

/// 登录并确定显示名：响应中的 name，其次 GET /users，最后是邮箱的本地部分
async fn authenticate(api: &BookReviewApi, req: &SigninRequest) -> ApiResult<(String, Option<String>)> {
    let (token, name) = api.signin(req).await?.into_session()?;
    if name.is_some() {
        return Ok((token, name));
    }

    let profile_name = match api.fetch_profile(&token).await {
        Ok(profile) => profile.name.filter(|n| !n.trim().is_empty()),
        Err(e) => {
            log::warn!("profile lookup after signin failed: {}", e);
            None
        }
    };
    Ok((token, profile_name.or_else(|| display_name_fallback(&req.email))))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let pagination = use_pagination();
    let api = expect_context::<BookReviewApi>();
    let from = router.take_nav_state().from;

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let page_error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let req = match form.validate() {
            Ok(req) => req,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        page_error.set(None);
        submitting.set(true);

        let api = api.clone();
        let target = from.clone().unwrap_or_else(AppRoute::auth_success_redirect);
        spawn_local(async move {
            match authenticate(&api, &req).await {
                Ok((token, name)) => {
                    sign_in(&auth, &token, name.as_deref());
                    pagination.set_page(ListKind::Private, 0);
                    notices.info("ログインできました");
                    router.navigate(target);
                }
                Err(e) => {
                    log::error!("signin failed: {}", e);
                    page_error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"ログイン"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" novalidate on:submit=on_submit>
                        <PageAlert message=page_error />

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
                                autocomplete="current-password"
                                aria-invalid=invalid_flag(errors, "password")
                                aria-describedby="password-error"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=move || password.get()
                                class="input input-bordered"
                            />
                            <FieldError errors=errors field="password" />
                        </div>
                        <div class="form-control mt-6">
                            <SubmitButton label="ログイン" busy_label="ログイン中..." submitting=submitting />
                        </div>
                        <p class="text-sm text-center mt-2">
                            "アカウントをお持ちでない方は "
                            <Link to=AppRoute::Signup class="link link-primary">"新規登録"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
