//! 书评表单组件（新建和编辑共用）
//!
//! 只负责输入框的渲染，提交逻辑由所在页面处理。

pub mod form_state;

use bookreview_shared::MAX_TEXT_LEN;
use leptos::prelude::*;

use form_state::ReviewFormState;

/// 单个输入项
#[component]
fn ReviewField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                id=id
                rows="4"
                maxlength=MAX_TEXT_LEN
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                type="text"
                maxlength=MAX_TEXT_LEN
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        }
        .into_any()
    };

    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
                <span class="label-text-alt text-base-content/50">
                    {move || format!("{}/{}", value.with(|v| v.chars().count()), MAX_TEXT_LEN)}
                </span>
            </label>
            {input}
        </div>
    }
}

/// 书评表单的四个输入项
#[component]
pub fn ReviewForm(state: ReviewFormState) -> impl IntoView {
    view! {
        <ReviewField id="title" label="タイトル" value=state.title />
        <ReviewField id="url" label="参考URL" value=state.url placeholder="https://example.com" />
        <ReviewField id="detail" label="書籍の詳細" value=state.detail multiline=true />
        <ReviewField id="review" label="レビュー" value=state.review multiline=true />
    }
}
