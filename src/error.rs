//! # 统一错误处理模块
//!
//! 定义 txtkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// txtkit 统一错误类型
#[derive(Error, Debug)]
pub enum TxtkitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename '{from}' -> '{to}'")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File name is not valid UTF-8: {path}")]
    InvalidFileName { path: String },

    // ─────────────────────────────────────────────────────────────
    // 空输入
    // ─────────────────────────────────────────────────────────────
    #[error("No files found in folder: {path}")]
    NoFilesFound { path: String },

    #[error("No TXT files found in folder: {path}")]
    NoTextFiles { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 报告 / 交互
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Terminal interaction failed")]
    Terminal(#[source] std::io::Error),

    #[error("Operation cancelled by user after {completed} of {total} file(s)")]
    Cancelled { completed: usize, total: usize },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TxtkitError>;

/// 展开错误链为单行描述（"外层: 内层: ..."）
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
