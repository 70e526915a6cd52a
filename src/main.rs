//! # txtkit - 批量文件重命名与 TXT 合并工具
//!
//! 将原本基于对话框的文件处理小工具用 Rust 重构为单一命令行程序。
//!
//! ## 子命令
//! - `rename`       - 批量截断文件名并转换扩展名
//! - `merge`        - 合并目录中的 TXT 文件
//! - `rename-one`   - 重命名单个文件
//! - `rename-merge` - 批量重命名为 .txt 后合并
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (交互流程：确认、进度条、结果汇报)
//!   │     └── batch/     (重命名与合并核心)
//!   ├── utils/      (输出、进度条、确认、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use batch::CancelToken;
use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let cancel = CancelToken::new();
    if let Err(e) = commands::run(cli.command, &cancel) {
        utils::output::print_error(&error::describe(&e));
        std::process::exit(1);
    }
}
