//! 分页上下文
//!
//! 公开列表和登录后列表的页码在视图切换之间保留，页面刷新后重置。

use bookreview_shared::{ListKind, PageCounter, PaginationState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PaginationContext {
    state: RwSignal<PaginationState>,
}

impl PaginationContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PaginationState::default()),
        }
    }

    /// 当前页码计数器（会被追踪）
    pub fn counter(&self, kind: ListKind) -> PageCounter {
        self.state.with(|s| s.counter(kind))
    }

    pub fn next(&self, kind: ListKind) {
        self.state.update(|s| s.next(kind));
    }

    pub fn prev(&self, kind: ListKind) {
        self.state.update(|s| s.prev(kind));
    }

    pub fn set_page(&self, kind: ListKind, page: i64) {
        self.state.update(|s| s.set_page(kind, page));
    }

    /// 登出时两个列表都回到第一页
    pub fn reset_all(&self) {
        self.state.update(PaginationState::reset_all);
    }
}

pub fn use_pagination() -> PaginationContext {
    expect_context::<PaginationContext>()
}
