//! # merge 子命令 CLI 定义
//!
//! 合并目录中的 TXT 文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/merge.rs`

use clap::Args;
use std::path::PathBuf;

/// merge 子命令参数
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Folder containing the .txt files to merge
    pub dir: PathBuf,

    /// Do not ask for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
