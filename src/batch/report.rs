//! # 重命名报告
//!
//! 将批量重命名的逐文件结果写入 CSV，记录实际成功与失败的文件。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `csv` + `serde` 序列化

use super::outcome::RenameOutcome;
use crate::error::{Result, TxtkitError};

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    source: String,
    target: String,
    status: &'static str,
    error: &'a str,
}

/// 写入重命名报告
pub fn write_rename_report(path: &Path, outcome: &RenameOutcome) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in &outcome.renamed {
        writer.serialize(ReportRow {
            source: record.source.display().to_string(),
            target: record.target.display().to_string(),
            status: if record.is_unchanged() {
                "unchanged"
            } else {
                "renamed"
            },
            error: "",
        })?;
    }

    for failure in &outcome.failures {
        writer.serialize(ReportRow {
            source: failure.source.display().to_string(),
            target: String::new(),
            status: "failed",
            error: &failure.reason,
        })?;
    }

    writer.flush().map_err(|e| TxtkitError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
