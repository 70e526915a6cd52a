//! # rename-merge 命令实现
//!
//! 先批量重命名为 .txt，再合并同一目录的 TXT 文件。
//!
//! ## 功能
//! - 扩展名必须规范化为 `txt`，否则合并阶段无文件可处理
//! - 重命名被取消或全部失败时不进入合并阶段
//!
//! ## 依赖关系
//! - 使用 `cli/pipeline.rs` 定义的参数
//! - 复用 `commands/rename.rs`, `commands/merge.rs` 的执行与汇报
//! - 使用 `batch/rename.rs`

use super::{merge, rename as rename_cmd};
use crate::batch::rename;
use crate::batch::{CancelToken, RenameOptions};
use crate::cli::pipeline::RenameMergeArgs;
use crate::error::{Result, TxtkitError};
use crate::utils::progress::{install_interrupt_handler, BarProgress};
use crate::utils::{output, prompt};

/// 执行 rename-merge 命令
pub fn execute(args: RenameMergeArgs, cancel: &CancelToken) -> Result<()> {
    output::print_header("Batch Rename and Merge");

    let options = RenameOptions::new(args.naming.keep_chars as usize, &args.naming.extension);
    check_extension(&options)?;

    let files = rename::collect_files(&args.dir, &options)?;
    let question = format!(
        "{} file(s) found in '{}'.\n  1. Rename every file to its first {} character(s) + '.{}'\n  2. Merge all .{} files into one",
        files.len(),
        args.dir.display(),
        options.keep_chars,
        options.extension,
        options.extension
    );
    if !prompt::confirm(&question, args.yes)? {
        output::print_warning("Batch operation cancelled, nothing was changed.");
        return Ok(());
    }

    install_interrupt_handler(cancel);

    // 第一步：重命名
    let mut bar = BarProgress::new(files.len(), "Renaming", cancel);
    let renamed = rename::rename_batch(&args.dir, &options, &mut bar)?;
    bar.finish();
    rename_cmd::summarize(&renamed, &options, &args.dir)?;

    if renamed.renamed_count() == 0 {
        return Err(TxtkitError::Other(
            "no file was renamed, skipping merge".to_string(),
        ));
    }

    // 第二步：合并
    let count = crate::batch::merge::text_manifest(&args.dir)?.len();
    let merged = merge::run_merge(&args.dir, count, cancel)?;
    merge::summarize(&merged)
}

/// 合并只处理 .txt，扩展名必须规范化为 txt
fn check_extension(options: &RenameOptions) -> Result<()> {
    if options.extension.eq_ignore_ascii_case("txt") {
        Ok(())
    } else {
        Err(TxtkitError::InvalidArgument(format!(
            "rename-merge only merges .txt files, got extension '{}'",
            options.extension
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::merge::{end_banner, start_banner, OUTPUT_PREFIX};
    use crate::cli::rename::NamingArgs;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn args(dir: &Path, keep_chars: u32) -> RenameMergeArgs {
        RenameMergeArgs {
            dir: dir.to_path_buf(),
            naming: NamingArgs {
                keep_chars,
                extension: "txt".to_string(),
            },
            yes: true,
        }
    }

    fn merge_outputs(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .unwrap()
                    .to_string_lossy()
                    .starts_with(OUTPUT_PREFIX)
            })
            .collect()
    }

    #[test]
    fn test_rename_then_merge() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("gamma.log"), "C").unwrap();
        fs::write(tmp.path().join("alpha_one.md"), "A\n").unwrap();
        fs::write(tmp.path().join("beta_two.dat"), "B").unwrap();

        execute(args(tmp.path(), 3), &CancelToken::new()).unwrap();

        for name in ["alp.txt", "bet.txt", "gam.txt"] {
            assert!(tmp.path().join(name).is_file(), "{name} missing");
        }
        assert!(!tmp.path().join("alpha_one.md").exists());

        let outputs = merge_outputs(tmp.path());
        assert_eq!(outputs.len(), 1);
        let name = outputs[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("合并结果_") && name.ends_with(".txt"));

        let expected = format!(
            "A\n{}{}B{}{}C{}",
            end_banner("alp.txt"),
            start_banner("bet.txt"),
            end_banner("bet.txt"),
            start_banner("gam.txt"),
            end_banner("gam.txt"),
        );
        assert_eq!(fs::read_to_string(&outputs[0]).unwrap(), expected);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_no_merge_when_every_rename_fails() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        for raw in [&b"one\xff.dat"[..], &b"two\xfe.dat"[..]] {
            fs::write(tmp.path().join(OsStr::from_bytes(raw)), "x").unwrap();
        }

        let err = execute(args(tmp.path(), 3), &CancelToken::new()).unwrap_err();

        assert!(matches!(err, TxtkitError::Other(_)));
        assert!(merge_outputs(tmp.path()).is_empty());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension(&RenameOptions::new(3, "txt")).is_ok());
        assert!(check_extension(&RenameOptions::new(3, ".TXT")).is_ok());
        assert!(check_extension(&RenameOptions::new(3, "")).is_ok());
        assert!(matches!(
            check_extension(&RenameOptions::new(3, "md")),
            Err(TxtkitError::InvalidArgument(_))
        ));
    }
}
