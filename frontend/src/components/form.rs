//! 表单公用部件
//!
//! 字段错误 `#<field>-error` 与页面级错误 `role="alert"` 的统一渲染。

use bookreview_shared::validation::FieldErrors;
use leptos::prelude::*;

/// 某个字段的校验错误；没有错误时不渲染任何节点
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|message| {
            view! {
                <p id=format!("{}-error", field) role="alert" class="text-error text-sm mt-1">
                    {message}
                </p>
            }
        })
    }
}

/// 字段是否有错误，用于 `aria-invalid`
pub fn invalid_flag(errors: RwSignal<FieldErrors>, field: &'static str) -> impl Fn() -> &'static str {
    move || {
        if errors.with(|e| e.get(field).is_some()) {
            "true"
        } else {
            "false"
        }
    }
}

/// 页面级错误
#[component]
pub fn PageAlert(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                    <span class="whitespace-pre-line">{text}</span>
                </div>
            }
        })
    }
}

/// 提交按钮：提交中显示 spinner
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    submitting: RwSignal<bool>,
    #[prop(into, optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let is_disabled = move || submitting.get() || disabled.is_some_and(|d| d.get());

    view! {
        <button type="submit" class="btn btn-primary" disabled=is_disabled>
            {move || if submitting.get() {
                view! { <span class="loading loading-spinner"></span> {busy_label.clone()} }.into_any()
            } else {
                label.clone().into_any()
            }}
        </button>
    }
}
