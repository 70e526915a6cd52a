//! # 批量操作结果
//!
//! 记录重命名与合并的逐文件结果及汇总统计。
//!
//! ## 功能
//! - 逐文件结果（成功 / 失败）
//! - 汇总统计与取消标记
//!
//! ## 依赖关系
//! - 被 `batch/rename.rs`, `batch/merge.rs`, `batch/report.rs` 使用
//! - 被 `commands/` 用于结果展示

use std::path::PathBuf;

/// 一次成功的重命名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl RenameRecord {
    /// 文件已经是目标名称，未实际移动
    pub fn is_unchanged(&self) -> bool {
        self.source == self.target
    }
}

/// 一次失败的重命名
#[derive(Debug, Clone)]
pub struct RenameFailure {
    pub source: PathBuf,
    pub reason: String,
}

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum FileResult {
    /// 重命名成功
    Renamed(RenameRecord),
    /// 重命名失败 (文件路径, 错误信息)
    Failed(RenameFailure),
}

/// 批量重命名结果统计
#[derive(Debug, Default)]
pub struct RenameOutcome {
    /// 目录中待处理的文件总数
    pub total: usize,
    /// 成功记录
    pub renamed: Vec<RenameRecord>,
    /// 失败详情
    pub failures: Vec<RenameFailure>,
    /// 是否被用户取消
    pub cancelled: bool,
}

impl RenameOutcome {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// 合并处理结果
    pub fn merge(&mut self, result: FileResult) {
        match result {
            FileResult::Renamed(record) => self.renamed.push(record),
            FileResult::Failed(failure) => self.failures.push(failure),
        }
    }

    /// 成功重命名的文件数
    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    /// 已处理（成功 + 失败）的文件数
    pub fn processed(&self) -> usize {
        self.renamed.len() + self.failures.len()
    }
}

/// 合并结果统计
#[derive(Debug)]
pub struct MergeOutcome {
    /// 清单中的 TXT 文件总数
    pub total: usize,
    /// 已写入输出的文件数（含以错误标记代替内容的文件）
    pub merged: usize,
    /// 输出文件路径
    pub output: PathBuf,
    /// 无法读取、以错误标记代替的文件名
    pub unreadable: Vec<String>,
    /// 是否被用户取消
    pub cancelled: bool,
}

impl MergeOutcome {
    pub fn new(total: usize, output: PathBuf) -> Self {
        Self {
            total,
            merged: 0,
            output,
            unreadable: Vec::new(),
            cancelled: false,
        }
    }
}
