//! # rename 命令实现
//!
//! 批量截断文件名并转换扩展名。
//!
//! ## 功能
//! - 统计文件并请求确认
//! - 进度条显示，Ctrl-C 取消
//! - 预演模式打印重命名计划表
//! - 可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/rename.rs`, `batch/report.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/prompt.rs`

use crate::batch::rename::{self, RenamePlan};
use crate::batch::{report, CancelToken, RenameOptions, RenameOutcome};
use crate::cli::rename::RenameArgs;
use crate::error::{Result, TxtkitError};
use crate::utils::progress::{install_interrupt_handler, BarProgress};
use crate::utils::{output, prompt};

use std::path::Path;
use tabled::{Table, Tabled};

/// 重命名计划表行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Original")]
    source: String,
    #[tabled(rename = "New name")]
    target: String,
}

/// 失败明细表行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs, cancel: &CancelToken) -> Result<()> {
    output::print_header("Batch Rename");

    let options = RenameOptions::new(args.naming.keep_chars as usize, &args.naming.extension)
        .with_pattern(&args.pattern);

    if args.dry_run {
        return preview(&args.dir, &options);
    }

    let files = rename::collect_files(&args.dir, &options)?;
    output::print_info(&format!(
        "Found {} file(s) in '{}'",
        files.len(),
        args.dir.display()
    ));

    let question = format!(
        "All files will be renamed to their first {} character(s) + '.{}'.",
        options.keep_chars, options.extension
    );
    if !prompt::confirm(&question, args.yes)? {
        output::print_warning("Batch rename cancelled, nothing was changed.");
        return Ok(());
    }

    install_interrupt_handler(cancel);
    let mut bar = BarProgress::new(files.len(), "Renaming", cancel);
    let outcome = rename::rename_batch(&args.dir, &options, &mut bar)?;
    bar.finish();

    if let Some(report_path) = &args.report {
        report::write_rename_report(report_path, &outcome)?;
        output::print_info(&format!("Report written to '{}'", report_path.display()));
    }

    summarize(&outcome, &options, &args.dir)
}

/// 打印重命名结果；取消时返回 `Cancelled` 错误
pub(super) fn summarize(
    outcome: &RenameOutcome,
    options: &RenameOptions,
    dir: &Path,
) -> Result<()> {
    if !outcome.failures.is_empty() {
        output::print_warning(&format!(
            "{} file(s) could not be renamed:",
            outcome.failures.len()
        ));
        let rows: Vec<FailureRow> = outcome
            .failures
            .iter()
            .map(|f| FailureRow {
                file: rename::display_name(&f.source),
                error: f.reason.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if outcome.cancelled {
        return Err(TxtkitError::Cancelled {
            completed: outcome.processed(),
            total: outcome.total,
        });
    }

    let unchanged = outcome.renamed.iter().filter(|r| r.is_unchanged()).count();
    if unchanged > 0 {
        output::print_skip(&format!("{unchanged} file(s) already had their target name"));
    }

    output::print_done(&format!(
        "Renamed {} file(s) to .{} in '{}'",
        outcome.renamed_count(),
        options.extension,
        dir.display()
    ));
    Ok(())
}

/// 预演：打印计划表，不修改任何文件
fn preview(dir: &Path, options: &RenameOptions) -> Result<()> {
    let plan = rename::plan_batch(dir, options)?;
    println!("{}", Table::new(plan_rows(&plan)));

    let blocked = plan.iter().filter(|p| p.target.is_none()).count();
    if blocked > 0 {
        output::print_warning(&format!("{blocked} file(s) cannot be renamed"));
    }
    output::print_info(&format!(
        "Dry run: {} file(s) planned, nothing was renamed.",
        plan.len() - blocked
    ));
    Ok(())
}

fn plan_rows(plan: &[RenamePlan]) -> Vec<PlanRow> {
    plan.iter()
        .enumerate()
        .map(|(i, p)| PlanRow {
            index: i + 1,
            source: rename::display_name(&p.source),
            target: p
                .target
                .as_deref()
                .map(rename::display_name)
                .unwrap_or_else(|| "(invalid file name)".to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_plan_rows() {
        let plan = vec![
            RenamePlan {
                source: PathBuf::from("d/abcdef.dat"),
                target: Some(PathBuf::from("d/abc.txt")),
            },
            RenamePlan {
                source: PathBuf::from("d/broken"),
                target: None,
            },
        ];
        let rows = plan_rows(&plan);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].source, "abcdef.dat");
        assert_eq!(rows[0].target, "abc.txt");
        assert_eq!(rows[1].target, "(invalid file name)");
    }
}
