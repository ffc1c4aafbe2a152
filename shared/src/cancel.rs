//! 协作式取消
//!
//! 视图在每次发起请求时创建一个令牌，输入变化或卸载时取消它；
//! 请求完成后先检查令牌，已取消的结果直接丢弃，不视为错误。

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// 等待 `fut` 完成；期间令牌被取消则丢弃结果
pub async fn unless_cancelled<F, T>(token: &CancelToken, fut: F) -> Option<T>
where
    F: Future<Output = T>,
{
    if token.is_cancelled() {
        return None;
    }
    let output = fut.await;
    if token.is_cancelled() { None } else { Some(output) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn live_token_passes_result_through() {
        let token = CancelToken::new();
        assert_eq!(unless_cancelled(&token, async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn cancelled_before_start_skips_the_result() {
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(unless_cancelled(&token, async { 7 }).await, None);
    }

    #[tokio::test]
    async fn cancellation_during_await_discards_result() {
        let token = CancelToken::new();
        let canceller = token.clone();
        // 请求已经发出，结果返回前视图被卸载
        let fut = async move {
            tokio::task::yield_now().await;
            canceller.cancel();
            "stale page"
        };
        assert_eq!(unless_cancelled(&token, fut).await, None);
    }

    #[tokio::test]
    async fn cancellation_from_another_task_discards_result() {
        let token = CancelToken::new();
        let canceller = token.clone();
        let fut = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            "stale page"
        };
        let cancel_task = async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            canceller.cancel();
        };
        let (result, ()) = tokio::join!(unless_cancelled(&token, fut), cancel_task);
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn newer_request_supersedes_older_one() {
        let first = CancelToken::new();
        let second = CancelToken::new();
        // 输入变化：旧令牌取消，新令牌生效
        first.cancel();
        let old = unless_cancelled(&first, async { "page 0" }).await;
        let new = unless_cancelled(&second, async { "page 1" }).await;
        assert_eq!(old, None);
        assert_eq!(new, Some("page 1"));
    }
}
