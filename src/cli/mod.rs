//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 批量截断重命名并转换扩展名
//! - `merge`: 合并目录中的 TXT 文件
//! - `rename-one`: 重命名单个文件
//! - `rename-merge`: 批量重命名后合并
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, merge, rename_one, pipeline

pub mod merge;
pub mod pipeline;
pub mod rename;
pub mod rename_one;

use clap::{ArgAction, Parser, Subcommand};

/// txtkit - 批量文件重命名与 TXT 合并工具
#[derive(Parser)]
#[command(name = "txtkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch file renaming and plain-text merging toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Truncate file names in a folder and change their extension
    Rename(rename::RenameArgs),

    /// Merge all .txt files in a folder into one timestamped file
    Merge(merge::MergeArgs),

    /// Truncate the name of a single file and change its extension
    RenameOne(rename_one::RenameOneArgs),

    /// Rename all files to .txt, then merge them
    RenameMerge(pipeline::RenameMergeArgs),
}
