//! # 命令执行模块
//!
//! 实现各子命令的交互流程：参数确认、进度条、结果汇报。
//! 文件处理逻辑全部委托给 `batch/`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: rename, merge, rename_one, pipeline

pub mod merge;
pub mod pipeline;
pub mod rename;
pub mod rename_one;

use crate::batch::CancelToken;
use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands, cancel: &CancelToken) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args, cancel),
        Commands::Merge(args) => merge::execute(args, cancel),
        Commands::RenameOne(args) => rename_one::execute(args),
        Commands::RenameMerge(args) => pipeline::execute(args, cancel),
    }
}
