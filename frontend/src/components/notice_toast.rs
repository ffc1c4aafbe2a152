use leptos::prelude::*;

use crate::notice::use_notices;

/// 右上角的提示条
#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = use_notices();

    move || {
        notices.current().map(|notice| {
            let class = if notice.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="status" class=class>
                        <span>{notice.message}</span>
                        <button class="btn btn-ghost btn-xs" on:click=move |_| notices.dismiss()>
                            "×"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
