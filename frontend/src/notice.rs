//! 全局提示
//!
//! 操作成功/失败的短暂提示，显示一段时间后自动消失。
//! 新提示会顶替旧提示，旧提示的定时器到期时不会清掉新提示。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
    id: u64,
}

#[derive(Clone, Copy)]
pub struct NoticeContext {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl NoticeContext {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    /// 当前显示的提示（会被追踪）
    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, message: String, is_error: bool) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some(Notice {
            message,
            is_error,
            id,
        }));

        let current = self.current;
        Timeout::new(self.duration_ms, move || {
            current.try_update(|notice| {
                if notice.as_ref().is_some_and(|n| n.id == id) {
                    *notice = None;
                }
            });
        })
        .forget();
    }
}

pub fn use_notices() -> NoticeContext {
    expect_context::<NoticeContext>()
}
