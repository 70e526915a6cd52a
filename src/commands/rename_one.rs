//! # rename-one 命令实现
//!
//! 重命名单个文件：预览新名称、确认、执行。
//!
//! ## 依赖关系
//! - 使用 `cli/rename_one.rs` 定义的参数
//! - 使用 `batch/rename.rs`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::batch::rename::{self, display_name};
use crate::cli::rename_one::RenameOneArgs;
use crate::error::Result;
use crate::utils::{output, prompt};

use std::path::Path;

/// 执行 rename-one 命令
pub fn execute(args: RenameOneArgs) -> Result<()> {
    output::print_header("Rename Single File");

    let keep_chars = args.keep_chars as usize;
    let extension = args
        .extension
        .unwrap_or_else(|| current_extension(&args.file));

    let planned = rename::plan_single(&args.file, keep_chars, &extension)?;
    let original_name = display_name(&args.file);
    let new_name = display_name(&planned);

    if planned == args.file {
        output::print_skip(&format!("'{original_name}' already has the requested name"));
        return Ok(());
    }

    let question = format!("Original name: {original_name}\nNew name:      {new_name}");
    if !prompt::confirm(&question, args.yes)? {
        output::print_warning("Rename cancelled, nothing was changed.");
        return Ok(());
    }

    let record = rename::rename_single(&args.file, keep_chars, &extension)?;
    output::print_rename(&original_name, &display_name(&record.target));
    Ok(())
}

/// 文件当前扩展名（无扩展名时为空，规范化后回退为 txt）
fn current_extension(file: &Path) -> String {
    file.extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_extension() {
        assert_eq!(current_extension(Path::new("a/notes.md")), "md");
        assert_eq!(current_extension(Path::new("a/README")), "");
        assert_eq!(current_extension(Path::new("a/.env")), "");
    }
}
