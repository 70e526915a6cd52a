//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，并把进度条接入批处理的
//! `Progress` 回调；Ctrl-C 通过 `ctrlc` 设置取消令牌。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif`, `ctrlc` crate
//! - 实现 `batch/progress.rs` 的 `Progress` trait
//! - 绘制期间登记到 `utils/logging.rs`，日志经由 `suspend` 输出

use super::logging::ACTIVE_BAR;
use crate::batch::{CancelToken, Progress};

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPT_HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .map(|s| s.progress_chars("#>-"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// 安装 Ctrl-C 处理器：第一次按下请求取消，第二次立即退出
///
/// 进程内只安装一次。
pub fn install_interrupt_handler(token: &CancelToken) {
    if INTERRUPT_HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let token = token.clone();
    let result = ctrlc::set_handler(move || {
        if token.is_cancelled() {
            std::process::exit(130);
        }
        token.cancel();
    });

    if let Err(e) = result {
        log::warn!("failed to install Ctrl-C handler: {e}");
    }
}

/// 终端进度条回调
///
/// 存活期间登记为日志的当前进度条，释放时注销。
pub struct BarProgress {
    pb: ProgressBar,
    token: CancelToken,
}

impl BarProgress {
    pub fn new(len: usize, message: &str, token: &CancelToken) -> Self {
        let pb = create_progress_bar(len as u64, message);
        ACTIVE_BAR.attach(&pb);
        Self {
            pb,
            token: token.clone(),
        }
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for BarProgress {
    fn drop(&mut self) {
        ACTIVE_BAR.detach();
    }
}

impl Progress for BarProgress {
    fn update(&mut self, step: usize, message: &str) -> bool {
        if self.token.is_cancelled() {
            self.pb.abandon_with_message("Cancelled");
            return false;
        }
        self.pb.set_position(step as u64);
        self.pb.set_message(message.to_string());
        true
    }
}
