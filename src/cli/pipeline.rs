//! # rename-merge 子命令 CLI 定义
//!
//! 批量重命名为 .txt 后合并
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/pipeline.rs`

use super::rename::NamingArgs;
use clap::Args;
use std::path::PathBuf;

/// rename-merge 子命令参数
#[derive(Args, Debug)]
pub struct RenameMergeArgs {
    /// Folder to process
    pub dir: PathBuf,

    #[command(flatten)]
    pub naming: NamingArgs,

    /// Do not ask for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
