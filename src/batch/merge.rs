//! # TXT 合并
//!
//! 将目录下全部 `.txt` 文件按文件名排序合并为 `合并结果_{时间戳}.txt`，
//! 文件之间插入分隔横幅。
//!
//! ## 功能
//! - 大小写不敏感的 `.txt` 清单，按文件名字典序排序
//! - UTF-8 解码，失败时回退 GBK
//! - 无法读取的文件以内联错误标记代替，合并继续
//! - 输出文件名冲突时追加计数后缀，不覆盖旧结果
//!
//! ## 依赖关系
//! - 被 `commands/merge.rs`, `commands/pipeline.rs` 调用
//! - 使用 `batch/collector.rs` 列出文件, `batch/rename.rs` 的冲突解析
//! - 使用 `encoding_rs` 解码 GBK, `chrono` 生成时间戳

use super::collector::FileCollector;
use super::outcome::MergeOutcome;
use super::progress::Progress;
use super::rename::{display_name, occupied_on_disk, resolve_target};
use crate::error::{Result, TxtkitError};

use chrono::{Local, NaiveDateTime};
use encoding_rs::GBK;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 输出文件名前缀
pub const OUTPUT_PREFIX: &str = "合并结果";

/// 横幅分隔线宽度
const BANNER_WIDTH: usize = 60;

/// 内容来源编码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Gbk,
}

/// 文件开始横幅（第一个文件前不写）
pub fn start_banner(name: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n\n{rule}\n文件: {name} (开始)\n{rule}\n\n")
}

/// 文件结束横幅
pub fn end_banner(name: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n\n{rule}\n文件: {name} (结束)\n{rule}\n")
}

fn undecodable_marker(name: &str) -> String {
    format!("\n\n[错误] 无法读取文件: {name} - content is neither valid UTF-8 nor GBK\n\n")
}

fn read_failure_marker(name: &str, err: &std::io::Error) -> String {
    format!("\n\n[错误] 处理文件时出错: {name} - {err}\n\n")
}

/// 先按 UTF-8 解码，失败时回退 GBK；两者都失败返回 `None`
pub fn decode_text(bytes: Vec<u8>) -> Option<(String, SourceEncoding)> {
    match String::from_utf8(bytes) {
        Ok(text) => Some((text, SourceEncoding::Utf8)),
        Err(e) => GBK
            .decode_without_bom_handling_and_without_replacement(e.as_bytes())
            .map(|text| (text.into_owned(), SourceEncoding::Gbk)),
    }
}

/// 目录中全部 `.txt` 文件，按文件名排序
pub fn text_manifest(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = FileCollector::new(dir).with_pattern("*.txt")?.collect()?;
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// 输出文件名 `合并结果_YYYYMMDD_HHMMSS`（不含扩展名）
pub fn output_stem(timestamp: &NaiveDateTime) -> String {
    format!("{}_{}", OUTPUT_PREFIX, timestamp.format("%Y%m%d_%H%M%S"))
}

/// 合并目录中的 TXT 文件，时间戳取当前本地时间
pub fn merge_text_files<P>(dir: &Path, progress: &mut P) -> Result<MergeOutcome>
where
    P: Progress + ?Sized,
{
    merge_text_files_at(dir, Local::now().naive_local(), progress)
}

/// 合并目录中的 TXT 文件
///
/// 每个文件前轮询一次 `progress`，返回 `false` 时停止并标记取消，
/// 输出文件保留已写入的部分。
pub fn merge_text_files_at<P>(
    dir: &Path,
    timestamp: NaiveDateTime,
    progress: &mut P,
) -> Result<MergeOutcome>
where
    P: Progress + ?Sized,
{
    let files = text_manifest(dir)?;
    if files.is_empty() {
        return Err(TxtkitError::NoTextFiles {
            path: dir.display().to_string(),
        });
    }

    let output = resolve_target(dir, &output_stem(&timestamp), "txt", None, occupied_on_disk);
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&output)
        .map_err(|e| TxtkitError::FileWriteError {
            path: output.display().to_string(),
            source: e,
        })?;
    let mut writer = MergeWriter {
        inner: BufWriter::new(file),
        path: &output,
    };

    let total = files.len();
    let mut outcome = MergeOutcome::new(total, output.clone());

    for (i, path) in files.iter().enumerate() {
        let name = display_name(path);
        if !progress.update(i + 1, &format!("Merging: {name} ({}/{total})", i + 1)) {
            log::info!("merge cancelled after {} file(s)", outcome.merged);
            outcome.cancelled = true;
            break;
        }

        if i > 0 {
            writer.write(&start_banner(&name))?;
        }

        match fs::read(path) {
            Ok(bytes) => match decode_text(bytes) {
                Some((text, encoding)) => {
                    if encoding == SourceEncoding::Gbk {
                        log::info!("'{name}' is not UTF-8, decoded as GBK");
                    }
                    writer.write(&text)?;
                    writer.write(&end_banner(&name))?;
                }
                None => {
                    log::warn!("'{name}' could not be decoded, writing error marker");
                    writer.write(&undecodable_marker(&name))?;
                    outcome.unreadable.push(name);
                }
            },
            Err(e) => {
                log::warn!("failed to read '{}': {e}", path.display());
                writer.write(&read_failure_marker(&name, &e))?;
                outcome.unreadable.push(name);
            }
        }
        outcome.merged += 1;
    }

    writer.flush()?;
    Ok(outcome)
}

/// 带路径上下文的输出写入器
struct MergeWriter<'a> {
    inner: BufWriter<fs::File>,
    path: &'a Path,
}

impl MergeWriter<'_> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner
            .write_all(text.as_bytes())
            .map_err(|e| self.write_error(e))
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: std::io::Error) -> TxtkitError {
        TxtkitError::FileWriteError {
            path: self.path.display().to_string(),
            source,
        }
    }
}
