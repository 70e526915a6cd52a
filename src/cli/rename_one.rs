//! # rename-one 子命令 CLI 定义
//!
//! 重命名单个文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename_one.rs`

use clap::Args;
use std::path::PathBuf;

/// rename-one 子命令参数
#[derive(Args, Debug)]
pub struct RenameOneArgs {
    /// File to rename
    pub file: PathBuf,

    /// Number of leading characters of the file name to keep
    #[arg(
        short = 'k',
        long = "keep",
        default_value_t = 5,
        env = "TXTKIT_KEEP_CHARS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub keep_chars: u32,

    /// New file extension (defaults to the current one)
    #[arg(short = 'e', long = "ext")]
    pub extension: Option<String>,

    /// Do not ask for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
