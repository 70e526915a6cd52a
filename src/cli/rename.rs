//! # rename 子命令 CLI 定义
//!
//! 批量截断文件名并转换扩展名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`
//! - `NamingArgs` 同时被 `cli/pipeline.rs` 复用

use clap::Args;
use std::path::PathBuf;

/// 命名参数（保留字符数 + 扩展名）
#[derive(Args, Debug)]
pub struct NamingArgs {
    /// Number of leading characters of each file name to keep
    #[arg(
        short = 'k',
        long = "keep",
        default_value_t = 5,
        env = "TXTKIT_KEEP_CHARS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub keep_chars: u32,

    /// New file extension (leading dots are stripped, empty means txt)
    #[arg(short = 'e', long = "ext", default_value = "txt", env = "TXTKIT_EXTENSION")]
    pub extension: String,
}

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Folder whose files will be renamed (not recursive)
    pub dir: PathBuf,

    #[command(flatten)]
    pub naming: NamingArgs,

    /// Only rename files matching these glob patterns (comma separated)
    #[arg(short, long, default_value = "*")]
    pub pattern: String,

    /// Show the planned renames without touching any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a CSV report of every rename to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not ask for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
