//! # 批量重命名
//!
//! 将文件名截断为前 N 个字符并替换扩展名，冲突时追加 `_1`, `_2`, … 后缀。
//!
//! ## 功能
//! - 扩展名规范化（去除前导点，空值回退为 `txt`）
//! - 按字符截断文件名主干
//! - 冲突检测与计数后缀
//! - 逐文件失败收集，批处理继续执行
//! - 预演（dry run）：在内存中模拟整批重命名
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs`, `commands/rename_one.rs`, `commands/pipeline.rs` 调用
//! - 使用 `batch/collector.rs` 列出文件
//! - 使用 `batch/progress.rs` 轮询取消

use super::collector::FileCollector;
use super::outcome::{FileResult, RenameFailure, RenameOutcome, RenameRecord};
use super::progress::Progress;
use crate::error::{self, Result, TxtkitError};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 规范化后为空时使用的扩展名
pub const DEFAULT_EXTENSION: &str = "txt";

/// 重命名参数
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// 保留的文件名字符数
    pub keep_chars: usize,
    /// 规范化后的目标扩展名（不含点）
    pub extension: String,
    /// 文件名匹配模式
    pub pattern: String,
}

impl RenameOptions {
    pub fn new(keep_chars: usize, extension: &str) -> Self {
        Self {
            keep_chars,
            extension: normalize_extension(extension),
            pattern: "*".to_string(),
        }
    }

    /// 只重命名匹配该模式的文件
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.keep_chars == 0 {
            return Err(TxtkitError::InvalidArgument(
                "number of characters to keep must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 预演结果中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source: PathBuf,
    /// `None` 表示该文件无法重命名（如文件名非 UTF-8）
    pub target: Option<PathBuf>,
}

/// 规范化扩展名：去除空白与前导点，空值回退为 `txt`
pub fn normalize_extension(extension: &str) -> String {
    let ext = extension.trim().trim_start_matches('.');
    if ext.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        ext.to_string()
    }
}

/// 截断为前 `keep_chars` 个字符
pub fn truncate_stem(stem: &str, keep_chars: usize) -> &str {
    match stem.char_indices().nth(keep_chars) {
        Some((idx, _)) => &stem[..idx],
        None => stem,
    }
}

/// 在 `dir` 中为 `{stem}.{ext}` 寻找空闲名称
///
/// 候选名被占用时依次尝试 `{stem}_1.{ext}`, `{stem}_2.{ext}`, …。
/// 若候选名恰为 `current`（文件自身），视为已就位。
pub fn resolve_target<F>(
    dir: &Path,
    stem: &str,
    extension: &str,
    current: Option<&Path>,
    is_taken: F,
) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let mut candidate = dir.join(format!("{stem}.{extension}"));
    let mut counter = 1usize;
    while Some(candidate.as_path()) != current && is_taken(&candidate) {
        candidate = dir.join(format!("{stem}_{counter}.{extension}"));
        counter += 1;
    }
    candidate
}

/// 磁盘上该路径是否已被占用（不跟随符号链接）
pub(crate) fn occupied_on_disk(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// 计算单个文件的目标路径
fn target_for<F>(file: &Path, keep_chars: usize, extension: &str, is_taken: F) -> Result<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let invalid = || TxtkitError::InvalidFileName {
        path: file.display().to_string(),
    };
    let stem = file.file_stem().ok_or_else(invalid)?;
    let stem = stem.to_str().ok_or_else(invalid)?;
    let dir = file.parent().unwrap_or_else(|| Path::new(""));

    Ok(resolve_target(
        dir,
        truncate_stem(stem, keep_chars),
        extension,
        Some(file),
        is_taken,
    ))
}

/// 原地重命名单个文件
fn rename_in_place(file: &Path, keep_chars: usize, extension: &str) -> Result<RenameRecord> {
    let target = target_for(file, keep_chars, extension, occupied_on_disk)?;

    if target != file {
        fs::rename(file, &target).map_err(|e| TxtkitError::RenameError {
            from: file.display().to_string(),
            to: target.display().to_string(),
            source: e,
        })?;
        log::debug!("renamed '{}' -> '{}'", file.display(), target.display());
    } else {
        log::debug!("'{}' already has its target name", file.display());
    }

    Ok(RenameRecord {
        source: file.to_path_buf(),
        target,
    })
}

/// 列出目录中待重命名的文件，目录为空时报错
pub fn collect_files(dir: &Path, options: &RenameOptions) -> Result<Vec<PathBuf>> {
    let files = FileCollector::new(dir)
        .with_pattern(&options.pattern)?
        .collect()?;

    if files.is_empty() {
        return Err(TxtkitError::NoFilesFound {
            path: dir.display().to_string(),
        });
    }
    Ok(files)
}

/// 批量重命名目录中的文件
///
/// 文件按文件系统枚举顺序处理。每个文件前轮询一次 `progress`，
/// 返回 `false` 时停止并标记取消，已重命名的文件不回滚。
/// 单个文件失败会被记录，不中断整批。
pub fn rename_batch<P>(
    dir: &Path,
    options: &RenameOptions,
    progress: &mut P,
) -> Result<RenameOutcome>
where
    P: Progress + ?Sized,
{
    options.validate()?;
    let files = collect_files(dir, options)?;
    let mut outcome = RenameOutcome::new(files.len());

    for (idx, file) in files.iter().enumerate() {
        let name = display_name(file);
        if !progress.update(idx + 1, &format!("Renaming: {name}...")) {
            log::info!("rename cancelled after {} file(s)", outcome.processed());
            outcome.cancelled = true;
            break;
        }

        let result = match rename_in_place(file, options.keep_chars, &options.extension) {
            Ok(record) => FileResult::Renamed(record),
            Err(e) => {
                let reason = error::describe(&e);
                log::warn!("{reason}");
                FileResult::Failed(RenameFailure {
                    source: file.clone(),
                    reason,
                })
            }
        };
        outcome.merge(result);
    }

    Ok(outcome)
}

/// 预演整批重命名，不触碰磁盘
///
/// 以内存中的占用集合模拟逐文件的存在性检查，结果与实际执行一致
/// （前提是执行期间目录未被外部修改）。
pub fn plan_batch(dir: &Path, options: &RenameOptions) -> Result<Vec<RenamePlan>> {
    options.validate()?;
    let files = collect_files(dir, options)?;

    let read_err = |e| TxtkitError::FileReadError {
        path: dir.display().to_string(),
        source: e,
    };
    let mut occupied: HashSet<PathBuf> = HashSet::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        occupied.insert(entry.map_err(read_err)?.path());
    }

    let mut plan = Vec::with_capacity(files.len());
    for file in files {
        let target = target_for(&file, options.keep_chars, &options.extension, |p| {
            occupied.contains(p)
        })
        .ok();
        if let Some(target) = &target {
            occupied.remove(&file);
            occupied.insert(target.clone());
        }
        plan.push(RenamePlan {
            source: file,
            target,
        });
    }

    Ok(plan)
}

/// 预览单个文件的目标路径
pub fn plan_single(file: &Path, keep_chars: usize, extension: &str) -> Result<PathBuf> {
    check_single(file, keep_chars)?;
    target_for(
        file,
        keep_chars,
        &normalize_extension(extension),
        occupied_on_disk,
    )
}

/// 重命名单个文件
pub fn rename_single(file: &Path, keep_chars: usize, extension: &str) -> Result<RenameRecord> {
    check_single(file, keep_chars)?;
    rename_in_place(file, keep_chars, &normalize_extension(extension))
}

fn check_single(file: &Path, keep_chars: usize) -> Result<()> {
    if !file.is_file() {
        return Err(TxtkitError::FileNotFound {
            path: file.display().to_string(),
        });
    }
    RenameOptions::new(keep_chars, DEFAULT_EXTENSION).validate()
}

/// 用于进度与报告的文件名
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
