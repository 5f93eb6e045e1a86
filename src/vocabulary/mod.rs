//! 词表模块：负责词表的加载与本地快照
pub mod loader;
pub mod snapshot;

// 导出核心接口
pub use self::loader::VocabularyLoader;
pub use self::snapshot::VocabularySnapshot;
