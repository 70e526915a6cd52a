//! # merge 命令实现
//!
//! 合并目录中的 TXT 文件为 `合并结果_{时间戳}.txt`。
//!
//! ## 功能
//! - 列出待合并文件（最多显示前 5 个）并请求确认
//! - 进度条显示，Ctrl-C 取消
//! - 汇报无法读取的文件
//!
//! ## 依赖关系
//! - 使用 `cli/merge.rs` 定义的参数
//! - 使用 `batch/merge.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/prompt.rs`

use crate::batch::merge;
use crate::batch::rename::display_name;
use crate::batch::{CancelToken, MergeOutcome};
use crate::cli::merge::MergeArgs;
use crate::error::{Result, TxtkitError};
use crate::utils::progress::{install_interrupt_handler, BarProgress};
use crate::utils::{output, prompt};

use std::path::{Path, PathBuf};

/// 确认时列出的文件数上限
const PREVIEW_LIMIT: usize = 5;

/// 执行 merge 命令
pub fn execute(args: MergeArgs, cancel: &CancelToken) -> Result<()> {
    output::print_header("Merging TXT Files");

    let files = merge::text_manifest(&args.dir)?;
    if files.is_empty() {
        return Err(TxtkitError::NoTextFiles {
            path: args.dir.display().to_string(),
        });
    }

    let question = format!(
        "The following files in '{}' will be merged:\n{}",
        args.dir.display(),
        preview_list(&files)
    );
    if !prompt::confirm(&question, args.yes)? {
        output::print_warning("Merge cancelled, nothing was written.");
        return Ok(());
    }

    install_interrupt_handler(cancel);
    let outcome = run_merge(&args.dir, files.len(), cancel)?;
    summarize(&outcome)
}

/// 带进度条执行合并
pub(super) fn run_merge(dir: &Path, count: usize, cancel: &CancelToken) -> Result<MergeOutcome> {
    let mut bar = BarProgress::new(count, "Merging", cancel);
    let outcome = merge::merge_text_files(dir, &mut bar)?;
    bar.finish();
    Ok(outcome)
}

/// 打印合并结果；取消时返回 `Cancelled` 错误
pub(super) fn summarize(outcome: &MergeOutcome) -> Result<()> {
    for name in &outcome.unreadable {
        output::print_warning(&format!(
            "'{name}' could not be read, an error marker was written instead"
        ));
    }

    if outcome.cancelled {
        output::print_info(&format!(
            "Partial output left at '{}'",
            outcome.output.display()
        ));
        return Err(TxtkitError::Cancelled {
            completed: outcome.merged,
            total: outcome.total,
        });
    }

    output::print_done(&format!("Merged {} file(s)", outcome.merged));
    output::print_info(&format!("Output file: {}", outcome.output.display()));
    Ok(())
}

/// 前 5 个文件名，多出部分以总数概括
fn preview_list(files: &[PathBuf]) -> String {
    let mut lines: Vec<String> = files
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|f| format!("  {}", display_name(f)))
        .collect();
    if files.len() > PREVIEW_LIMIT {
        lines.push(format!("  ... {} files in total", files.len()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_list_truncates() {
        let files: Vec<PathBuf> = (1..=7).map(|i| PathBuf::from(format!("d/{i}.txt"))).collect();
        let text = preview_list(&files);
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("  1.txt"));
        assert!(text.ends_with("... 7 files in total"));

        let short = preview_list(&files[..2]);
        assert_eq!(short, "  1.txt\n  2.txt");
    }
}
