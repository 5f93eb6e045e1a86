//! 过滤器配置管理

use std::path::PathBuf;

use sensitive_filter_engine::Word;

/// 默认噪音字符集
pub const DEFAULT_NOISE: &str = "*~!@#$%^&*()_+";
/// 默认掩码字符
pub const DEFAULT_MASK_CHAR: char = '*';

/// 词表来源
#[derive(Debug, Clone, Default)]
pub enum VocabularySource {
    #[default]
    Empty,                // 空词表（运行时再 add_word）
    Words(Vec<Word>),     // 调用方直接提供的词条
    JsonFile(PathBuf),    // JSON 数组文件
    TextFile(PathBuf),    // 每行一个词条的文本文件
    Snapshot(PathBuf),    // MessagePack 词表快照
}

/// 过滤器配置
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// 词表来源
    pub source: VocabularySource,
    /// find_default_noise / replace_default_noise 使用的噪音字符
    pub noise: String,
    /// replace 使用的掩码字符
    pub mask_char: char,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            source: VocabularySource::Empty,
            noise: DEFAULT_NOISE.to_string(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl FilterConfig {
    /// 直接提供词条
    pub fn words(words: Vec<Word>) -> Self {
        Self {
            source: VocabularySource::Words(words),
            ..Default::default()
        }
    }

    /// JSON 词表文件
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: VocabularySource::JsonFile(path.into()),
            ..Default::default()
        }
    }

    /// 文本词表文件
    pub fn text_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: VocabularySource::TextFile(path.into()),
            ..Default::default()
        }
    }

    /// MessagePack 词表快照
    pub fn snapshot(path: impl Into<PathBuf>) -> Self {
        Self {
            source: VocabularySource::Snapshot(path.into()),
            ..Default::default()
        }
    }

    /// 按扩展名推断词表格式：.json → JSON，.mp / .msgpack → 快照，其余按文本处理
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::json_file(path),
            Some("mp") | Some("msgpack") => Self::snapshot(path),
            _ => Self::text_file(path),
        }
    }

    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
    }
}

/// 配置构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: VocabularySource) -> Self {
        self.config.source = source;
        self
    }

    pub fn noise(mut self, noise: impl Into<String>) -> Self {
        self.config.noise = noise.into();
        self
    }

    pub fn mask_char(mut self, mask_char: char) -> Self {
        self.config.mask_char = mask_char;
        self
    }

    pub fn build(self) -> FilterConfig {
        self.config
    }
}
