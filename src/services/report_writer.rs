//! 讲解文件写入服务 - 业务能力层
//!
//! 只负责把渲染好的讲解写到 `<题目名>_explanation.md`

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 讲解文件写入服务
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// 使用自定义输出目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
        }
    }

    /// 题目对应的文件路径，题目名按用户输入原样使用
    pub fn path_for(&self, problem_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_explanation.md", problem_name))
    }

    /// 写入讲解，已存在的文件会被覆盖
    pub async fn save(&self, problem_name: &str, markdown: &str) -> AppResult<PathBuf> {
        let path = self.path_for(problem_name);
        debug!("写入讲解: {} ({} 字节)", path.display(), markdown.len());

        tokio::fs::write(&path, markdown)
            .await
            .map_err(|source| write_error(&path, source))?;

        Ok(path)
    }
}

fn write_error(path: &Path, source: std::io::Error) -> AppError {
    AppError::ReportWrite {
        path: path.display().to_string(),
        source,
    }
}
