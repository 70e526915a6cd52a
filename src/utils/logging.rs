//! # 日志初始化
//!
//! `log` 门面 + `simplelog` 终端输出（stderr）。
//!
//! 进度条与日志共用 stderr：`BarProgress` 绘制期间把进度条登记到
//! [`ACTIVE_BAR`]，日志记录在 `ProgressBar::suspend` 内输出，避免与
//! 进度条交错。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 被 `utils/progress.rs` 用于登记当前进度条

use indicatif::ProgressBar;
use log::{Log, Metadata, Record};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 当前正在绘制的进度条
pub static ACTIVE_BAR: BarSlot = BarSlot::new();

/// 至多容纳一个进度条的登记位
pub struct BarSlot(Mutex<Option<ProgressBar>>);

impl BarSlot {
    pub const fn new() -> Self {
        Self(Mutex::new(None))
    }

    pub fn attach(&self, pb: &ProgressBar) {
        *self.lock() = Some(pb.clone());
    }

    pub fn detach(&self) {
        *self.lock() = None;
    }

    fn current(&self) -> Option<ProgressBar> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 在登记的进度条挂起期间输出日志
pub struct SuspendingLogger {
    inner: Box<dyn Log>,
    slot: &'static BarSlot,
}

impl SuspendingLogger {
    pub fn new(inner: Box<dyn Log>, slot: &'static BarSlot) -> Self {
        Self { inner, slot }
    }
}

impl Log for SuspendingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // 先取出克隆再释放锁，suspend 期间不持有登记位
        match self.slot.current() {
            Some(pb) => pb.suspend(|| self.inner.log(record)),
            None => self.inner.log(record),
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// 按 `-v` 次数选择日志级别
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// 初始化全局日志
pub fn init(verbose: u8) {
    let level = level_for(verbose);
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let term = TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto);
    let logger = SuspendingLogger::new(term, &ACTIVE_BAR);

    // 重复初始化时保留已有 logger
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::sync::Arc;

    /// 记录消息的测试 logger
    struct Recorder {
        level: LevelFilter,
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Log for Recorder {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= self.level
        }

        fn log(&self, record: &Record) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    fn recording_logger() -> (SuspendingLogger, &'static BarSlot, Arc<Mutex<Vec<String>>>) {
        let slot: &'static BarSlot = Box::leak(Box::new(BarSlot::new()));
        let lines = Arc::new(Mutex::new(Vec::new()));
        let inner = Recorder {
            level: LevelFilter::Warn,
            lines: Arc::clone(&lines),
        };
        (SuspendingLogger::new(Box::new(inner), slot), slot, lines)
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(5), LevelFilter::Debug);
    }

    #[test]
    fn test_bar_slot_attach_detach() {
        let slot = BarSlot::new();
        assert!(slot.current().is_none());

        let pb = ProgressBar::hidden();
        pb.set_position(7);
        slot.attach(&pb);
        assert_eq!(slot.current().map(|p| p.position()), Some(7));

        slot.detach();
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_records_pass_through_with_active_bar() {
        let (logger, slot, lines) = recording_logger();

        logger.log(
            &Record::builder()
                .args(format_args!("before bar"))
                .level(Level::Warn)
                .build(),
        );

        let pb = ProgressBar::hidden();
        slot.attach(&pb);
        logger.log(
            &Record::builder()
                .args(format_args!("during bar"))
                .level(Level::Warn)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("filtered"))
                .level(Level::Debug)
                .build(),
        );
        slot.detach();

        assert_eq!(*lines.lock().unwrap(), vec!["before bar", "during bar"]);
        assert!(!pb.is_finished());
    }
}
