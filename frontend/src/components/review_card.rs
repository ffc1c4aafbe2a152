use bookreview_shared::{AppRoute, Review};
use leptos::prelude::*;

use crate::web::router::{NavState, use_router};

/// 列表中的一张书评卡片；点击进入详情并把自身作为预览带过去
#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let router = use_router();
    let target = AppRoute::ReviewDetail(review.id.clone());
    let href = target.to_path();

    let title = review.display_title();
    let reviewer = review.reviewer_name().map(str::to_string);
    let link = review.link().map(str::to_string);
    let detail = review.detail_text().map(Review::excerpt);
    let body = review.review_text().map(Review::excerpt);

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.navigate_with(target.clone(), NavState::preview(review.clone()));
    };

    view! {
        <li class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body gap-2">
                <h2 class="card-title">
                    <a href=href class="link link-hover" on:click=on_click>{title}</a>
                </h2>
                {reviewer.map(|name| view! {
                    <p class="text-sm text-base-content/70">"レビュアー: " {name}</p>
                })}
                {link.map(|url| view! {
                    <a href=url.clone() target="_blank" rel="noopener noreferrer" class="link link-primary text-sm break-all">
                        {url.clone()}
                    </a>
                })}
                {detail.map(|text| view! { <p class="text-sm">{text}</p> })}
                {body.map(|text| view! { <p class="text-sm text-base-content/80">{text}</p> })}
            </div>
        </li>
    }
}
