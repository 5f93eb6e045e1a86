//! 全局错误类型定义

use sensitive_filter_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    // 内核错误（词条/分类解析）
    #[error("词条解析失败：{0}")]
    Core(#[from] CoreError),

    // 词表相关错误
    #[error("词表加载失败：{0}")]
    VocabularyLoadError(String),
    #[error("词表第{line}行解析失败（{}）：{source}", .path.display())]
    VocabularyLineError {
        path: PathBuf,
        line: usize,
        #[source]
        source: CoreError,
    },
    #[error("词表快照失败：{0}")]
    SnapshotError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type FilterResult<T> = Result<T, FilterError>;
