use leptos::prelude::*;

/// 上一页/下一页与 1 起始的页码
#[component]
pub fn Paginator(
    #[prop(into)] page_label: Signal<u32>,
    #[prop(into)] has_prev: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="join justify-center w-full" aria-label="ページ送り">
            <button
                class="join-item btn"
                disabled=move || loading.get() || !has_prev.get()
                on:click=move |_| on_prev.run(())
            >
                "« 前へ"
            </button>
            <span class="join-item btn btn-disabled no-animation" aria-live="polite">
                {move || format!("{} ページ", page_label.get())}
            </span>
            <button
                class="join-item btn"
                disabled=move || loading.get() || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                "次へ »"
            </button>
        </nav>
    }
}
