//! # 终端确认
//!
//! 代替图形界面的 "是/否" 确认对话框。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `console` 读取终端输入, `colored` 着色

use crate::error::{Result, TxtkitError};

use colored::Colorize;
use console::Term;

/// 询问是否继续；`assume_yes` 为真时直接通过
///
/// 非交互终端读到空行，视为拒绝。
pub fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let term = Term::stderr();
    term.write_line(question).map_err(TxtkitError::Terminal)?;
    term.write_str(&format!("{} Continue? [y/N] ", "[?]".cyan().bold()))
        .map_err(TxtkitError::Terminal)?;
    let answer = term.read_line().map_err(TxtkitError::Terminal)?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
