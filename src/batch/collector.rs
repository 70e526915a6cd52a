//! # 文件收集器
//!
//! 列出目录下（不递归）待处理的文件。
//!
//! ## 功能
//! - 仅收集普通文件，跳过子目录
//! - glob 模式匹配（大小写不敏感）
//! - 保留文件系统枚举顺序，排序由调用方决定
//!
//! ## 依赖关系
//! - 被 `batch/rename.rs`, `batch/merge.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{Result, TxtkitError};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    dir: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器（匹配全部文件）
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            patterns: Vec::new(),
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "*")
            .map(|s| {
                Pattern::new(s).map_err(|e| TxtkitError::InvalidPattern {
                    pattern: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(TxtkitError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| TxtkitError::FileReadError {
                path: self.dir.display().to_string(),
                source: e.into(),
            })?;
            // 跟随符号链接判断
            if entry.path().is_file() && self.matches_patterns(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.patterns
            .iter()
            .any(|p| p.matches_with(&filename, MATCH_OPTIONS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_collect_skips_directories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.dat"), "b").unwrap();
        fs::create_dir(tmp.path().join("sub.txt")).unwrap();
        fs::write(tmp.path().join("sub.txt").join("inner.txt"), "c").unwrap();

        let files = FileCollector::new(tmp.path()).collect().unwrap();
        assert_eq!(names(&files), vec!["a.txt", "b.dat"]);
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.TXT"), "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();
        fs::write(tmp.path().join("c.md"), "c").unwrap();

        let files = FileCollector::new(tmp.path())
            .with_pattern("*.txt")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_multiple_patterns() {
        let tmp = TempDir::new().unwrap();
        for name in ["x.res", "y.cell", "z.cif"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        let files = FileCollector::new(tmp.path())
            .with_pattern("*.res, *.cell")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["x.res", "y.cell"]);
    }

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = FileCollector::new(&tmp.path().join("nope"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, TxtkitError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_invalid_pattern() {
        let tmp = TempDir::new().unwrap();
        assert!(FileCollector::new(tmp.path()).with_pattern("[a").is_err());
    }
}
