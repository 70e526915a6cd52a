//! # 批量处理模块
//!
//! 文件批处理核心：批量重命名与 TXT 合并。
//! 与终端交互无关，进度与取消通过 `Progress` 回调注入。
//!
//! ## 功能
//! - 收集目录文件列表
//! - 截断重命名与冲突解析
//! - 带分隔横幅的 TXT 合并
//! - 结果统计与 CSV 报告
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir`, `glob`, `encoding_rs`, `chrono`, `csv`

pub mod collector;
pub mod merge;
pub mod outcome;
pub mod progress;
pub mod rename;
pub mod report;

pub use outcome::{MergeOutcome, RenameOutcome};
pub use progress::{CancelToken, Progress};
pub use rename::RenameOptions;
