//! sensitive-filter-engine - 敏感词字典树匹配内核

// 词条、分类位掩码、字典树节点
pub mod core;
// 字典树构建 + 扫描匹配
pub mod trie;
// 内核错误定义
pub mod error;
// 日志格式化等辅助工具
pub mod utils;

// 顶层导出常用类型
pub use self::core::{Node, Word, WordFlags};
pub use self::error::{CoreError, CoreResult};
pub use self::trie::{NoiseSet, Trie, WordMatch, EMPTY_NOISE};
