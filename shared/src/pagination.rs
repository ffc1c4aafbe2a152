//! 列表分页状态
//!
//! 公开列表和登录后列表各有一个从 0 开始的页码，互不影响。
//! 是否有下一页由上一次请求是否恰好返回 `PAGE_SIZE` 条推断，
//! 服务器不提供总数，剩余条数恰为 10 的倍数时会多出一个空页。

use crate::PAGE_SIZE;

/// 列表种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Public,
    Private,
}

/// 单个页码计数器，下限为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCounter(u32);

impl PageCounter {
    pub fn new(page: u32) -> Self {
        Self(page)
    }

    pub fn page(&self) -> u32 {
        self.0
    }

    pub fn next(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn prev(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// 负数按 0 处理
    pub fn set(&mut self, page: i64) {
        self.0 = page.clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// 列表请求使用的 offset
    pub fn offset(&self) -> u32 {
        self.0.saturating_mul(PAGE_SIZE)
    }

    /// 页面上展示的 1 起始页码
    pub fn label(&self) -> u32 {
        self.0.saturating_add(1)
    }

    pub fn has_prev_page(&self) -> bool {
        self.0 > 0
    }
}

/// 全局分页状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub public: PageCounter,
    pub private: PageCounter,
}

impl PaginationState {
    pub fn counter(&self, kind: ListKind) -> PageCounter {
        match kind {
            ListKind::Public => self.public,
            ListKind::Private => self.private,
        }
    }

    fn counter_mut(&mut self, kind: ListKind) -> &mut PageCounter {
        match kind {
            ListKind::Public => &mut self.public,
            ListKind::Private => &mut self.private,
        }
    }

    pub fn next(&mut self, kind: ListKind) {
        self.counter_mut(kind).next();
    }

    pub fn prev(&mut self, kind: ListKind) {
        self.counter_mut(kind).prev();
    }

    pub fn set_page(&mut self, kind: ListKind, page: i64) {
        self.counter_mut(kind).set(page);
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

/// 上一次请求恰好返回满页时才允许"下一页"
pub fn has_next_page(returned_len: usize) -> bool {
    returned_len == PAGE_SIZE as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_on_first_page_stays_at_zero() {
        let mut state = PaginationState::default();
        state.prev(ListKind::Public);
        assert_eq!(state.public.page(), 0);
        assert_eq!(state.public.offset(), 0);
    }

    #[test]
    fn next_from_zero_moves_to_page_one() {
        let mut state = PaginationState::default();
        state.next(ListKind::Public);
        assert_eq!(state.public.page(), 1);
        assert_eq!(state.public.offset(), 10);
        assert_eq!(state.public.label(), 2);
    }

    #[test]
    fn offset_is_page_times_ten() {
        for page in [0_i64, 1, 2, 7, 31] {
            let mut counter = PageCounter::default();
            counter.set(page);
            assert_eq!(i64::from(counter.offset()), page * 10);
        }
    }

    #[test]
    fn counters_are_independent() {
        let mut state = PaginationState::default();
        state.next(ListKind::Private);
        state.next(ListKind::Private);
        state.next(ListKind::Public);
        state.prev(ListKind::Private);
        assert_eq!(state.counter(ListKind::Private).page(), 1);
        assert_eq!(state.counter(ListKind::Public).page(), 1);
    }

    #[test]
    fn set_page_floors_negative_values() {
        let mut state = PaginationState::default();
        state.set_page(ListKind::Private, -4);
        assert_eq!(state.private.page(), 0);
        state.set_page(ListKind::Private, 3);
        assert_eq!(state.private.page(), 3);
    }

    #[test]
    fn prev_page_exists_after_first_page() {
        let mut counter = PageCounter::default();
        assert!(!counter.has_prev_page());
        counter.next();
        assert!(counter.has_prev_page());
        counter.prev();
        assert!(!counter.has_prev_page());
    }

    #[test]
    fn reset_all_zeroes_both() {
        let mut state = PaginationState::default();
        state.set_page(ListKind::Public, 5);
        state.set_page(ListKind::Private, 2);
        state.reset_all();
        assert_eq!(state, PaginationState::default());
    }

    #[test]
    fn next_page_is_inferred_from_full_page() {
        assert!(has_next_page(10));
        assert!(!has_next_page(9));
        assert!(!has_next_page(0));
    }
}
