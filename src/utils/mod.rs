//! # 工具函数模块
//!
//! 提供美化输出、进度条、终端确认与日志初始化。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 子模块: output, progress, prompt, logging

pub mod logging;
pub mod output;
pub mod progress;
pub mod prompt;
