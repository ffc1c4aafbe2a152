//! 书评表单状态
//!
//! 将四个输入框的 signal 整合为 `ReviewFormState`，负责：
//! - 数据的持有
//! - 从已有书评回填
//! - 转换为提交用的草稿

use bookreview_shared::Review;
use bookreview_shared::validation::ReviewDraft;
use leptos::prelude::*;

/// 使用 `RwSignal` 因为它实现了 `Copy`，可以直接作为 Props 传递。
#[derive(Clone, Copy)]
pub struct ReviewFormState {
    pub title: RwSignal<String>,
    pub url: RwSignal<String>,
    pub detail: RwSignal<String>,
    pub review: RwSignal<String>,
}

impl ReviewFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            url: RwSignal::new(String::new()),
            detail: RwSignal::new(String::new()),
            review: RwSignal::new(String::new()),
        }
    }

    /// 用服务器返回的书评回填（去掉首尾空白）
    pub fn fill_from(&self, review: &Review) {
        let trimmed = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();
        self.title.set(trimmed(&review.title));
        self.url.set(trimmed(&review.url));
        self.detail.set(trimmed(&review.detail));
        self.review.set(trimmed(&review.review));
    }

    /// 当前输入（会被追踪）
    pub fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            title: self.title.get(),
            detail: self.detail.get(),
            review: self.review.get(),
            url: self.url.get(),
        }
    }

    pub fn draft_untracked(&self) -> ReviewDraft {
        ReviewDraft {
            title: self.title.get_untracked(),
            detail: self.detail.get_untracked(),
            review: self.review.get_untracked(),
            url: self.url.get_untracked(),
        }
    }

    /// 四项都填写后才允许提交
    pub fn can_submit(&self) -> Signal<bool> {
        let state = *self;
        Signal::derive(move || state.draft().can_submit())
    }
}

impl Default for ReviewFormState {
    fn default() -> Self {
        Self::new()
    }
}
