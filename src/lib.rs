//! sensitive-filter - 敏感词过滤（字典树多模式匹配 + 噪音字符跳过 + 分类位掩码）

// 导出全局错误类型
pub use self::error::{FilterError, FilterResult};

// 导出配置模块
pub use self::config::{
    DEFAULT_MASK_CHAR, DEFAULT_NOISE, FilterConfig, FilterConfigBuilder, VocabularySource,
};

// 导出过滤器
pub use self::filter::Filter;

// 导出词表加载/快照
pub use self::vocabulary::{VocabularyLoader, VocabularySnapshot};

// 导出内核常用类型
pub use sensitive_filter_engine::{CoreError, NoiseSet, Trie, Word, WordFlags, WordMatch};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod filter;
pub mod vocabulary;
