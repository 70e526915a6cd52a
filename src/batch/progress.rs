//! # 进度回调
//!
//! 批量操作每处理一个文件前轮询一次进度回调，回调返回 `false`
//! 表示用户请求取消，操作在当前迭代点停止并返回已完成的部分。
//!
//! ## 依赖关系
//! - 被 `batch/rename.rs`, `batch/merge.rs` 使用
//! - `utils/progress.rs` 提供终端进度条实现

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 进度回调
pub trait Progress {
    /// 报告第 `step` 步（从 1 开始）及状态消息，返回 `false` 表示取消
    fn update(&mut self, step: usize, message: &str) -> bool;
}

/// 取消令牌，可跨线程共享（如 Ctrl-C 处理器）
///
/// 本身也实现 `Progress`：不报告进度，仅在被取消后返回 `false`。
#[derive(Debug, Default, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Progress for CancelToken {
    fn update(&mut self, _step: usize, _message: &str) -> bool {
        !self.is_cancelled()
    }
}

impl<F> Progress for F
where
    F: FnMut(usize, &str) -> bool,
{
    fn update(&mut self, step: usize, message: &str) -> bool {
        self(step, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_progress() {
        let mut seen = Vec::new();
        let mut cb = |step: usize, msg: &str| {
            seen.push((step, msg.to_string()));
            step < 2
        };
        assert!(cb.update(1, "a"));
        assert!(!cb.update(2, "b"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let mut observer = token.clone();
        assert!(observer.update(1, "a"));
        token.cancel();
        assert!(!observer.update(2, "b"));
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_fresh_token_never_cancels() {
        let mut token = CancelToken::new();
        assert!((1..100).all(|i| token.update(i, "x")));
    }
}
