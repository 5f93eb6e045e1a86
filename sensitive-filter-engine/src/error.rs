//! sensitive-filter-engine 内核错误定义
//! 匹配本身不会失败，这里只覆盖词条/标记解析阶段的错误
use thiserror::Error;

/// 内核核心错误枚举
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// 未知的分类标记名称（不在 illegal/sensitive/silence/replace 之内）
    #[error("Unknown word flag: {0}")]
    UnknownFlag(String),

    /// 位掩码包含四个分类位之外的比特
    #[error("Invalid flag bits: {0:#06b}")]
    InvalidFlagBits(u8),

    /// 词表行格式错误
    #[error("Invalid word line: {0}")]
    InvalidWordLine(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
