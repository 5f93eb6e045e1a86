//! 敏感词过滤器：字典树的并发安全封装
//! 读操作（find_*）共享读锁，写操作（add/del/reload）独占写锁

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sensitive_filter_engine::{EMPTY_NOISE, NoiseSet, Trie, Word};
use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::error::FilterResult;
use crate::vocabulary::{VocabularyLoader, VocabularySnapshot};

/// 敏感词过滤器
/// 每个实例独占一棵字典树，没有任何全局状态，需显式构建
#[derive(Debug)]
pub struct Filter {
    trie: RwLock<Trie>,
    config: FilterConfig,
    default_noise: NoiseSet,
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter {
    /// 创建空过滤器
    pub fn new() -> Self {
        Self::from_parts(Trie::new(), FilterConfig::default())
    }

    /// 按配置创建过滤器，并加载配置指定的词表
    pub async fn with_config(config: FilterConfig) -> FilterResult<Self> {
        let words = VocabularyLoader::load(&config.source).await?;
        let mut trie = Trie::new();
        trie.add(&words);
        info!("过滤器初始化完成，词条数：{}", trie.len());
        Ok(Self::from_parts(trie, config))
    }

    fn from_parts(trie: Trie, config: FilterConfig) -> Self {
        let default_noise = NoiseSet::new(&config.noise);
        Self {
            trie: RwLock::new(trie),
            config,
            default_noise,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    // 锁中毒时沿用内部数据：字典树的任何操作都不会在中途留下半更新状态
    fn read(&self) -> RwLockReadGuard<'_, Trie> {
        self.trie.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Trie> {
        self.trie.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// 添加词条（同文本重复添加时分类标记取并集）
    pub fn add_word(&self, words: &[Word]) {
        self.write().add(words);
    }

    /// 按文本词表格式批量添加（`词条<TAB>分类`，每行一个），返回添加的词条数
    /// 任意一行解析失败时不添加任何词条
    pub fn add_lines(&self, content: &str) -> FilterResult<usize> {
        let words = content
            .lines()
            .filter_map(|line| Word::parse_line(line).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        self.add_word(&words);
        Ok(words.len())
    }

    /// 删除词条（仅清除分类数据，不存在时静默忽略）
    pub fn del_word<S: AsRef<str>>(&self, names: &[S]) {
        self.write().del(names);
    }

    /// 查找全部命中词条，不跳过噪音字符
    pub fn find_all(&self, text: &str) -> Vec<Word> {
        self.read().find_all(text, &EMPTY_NOISE)
    }

    /// 查找全部命中词条，匹配中途跳过 noise 中的字符
    pub fn find_noise_all(&self, text: &str, noise: &str) -> Vec<Word> {
        let noise = NoiseSet::new(noise);
        self.read().find_all(text, &noise)
    }

    /// 使用配置中的噪音字符查找
    pub fn find_default_noise(&self, text: &str) -> Vec<Word> {
        self.read().find_all(text, &self.default_noise)
    }

    /// 是否至少命中一个词条
    pub fn contains_any(&self, text: &str) -> bool {
        !self.read().find_matches(text, &EMPTY_NOISE).is_empty()
    }

    /// 把带替换标记的词条替换为掩码字符
    pub fn replace(&self, text: &str) -> String {
        self.read().replace(text, &EMPTY_NOISE, self.config.mask_char)
    }

    /// 同 replace，匹配中途跳过 noise 中的字符，被跳过的噪音字符一并替换
    pub fn replace_noise(&self, text: &str, noise: &str) -> String {
        let noise = NoiseSet::new(noise);
        self.read().replace(text, &noise, self.config.mask_char)
    }

    /// 使用配置中的噪音字符替换
    pub fn replace_default_noise(&self, text: &str) -> String {
        self.read()
            .replace(text, &self.default_noise, self.config.mask_char)
    }

    /// 热更新：锁外构建新字典树，再在写锁内整体替换
    /// 读者只会看到旧词表或新词表，不会看到中间状态
    pub fn reload(&self, words: &[Word]) {
        let mut fresh = Trie::new();
        fresh.add(words);
        let count = fresh.len();

        let previous = std::mem::replace(&mut *self.write(), fresh);
        info!("词表热更新完成，旧词条数：{}，新词条数：{}", previous.len(), count);
    }

    /// 从配置的来源重新加载词表并热更新
    pub async fn reload_from_source(&self) -> FilterResult<usize> {
        let words = VocabularyLoader::load(&self.config.source).await?;
        self.reload(&words);
        Ok(words.len())
    }

    /// 当前词表（拷贝）
    pub fn words(&self) -> Vec<Word> {
        self.read().words()
    }

    pub fn word_count(&self) -> usize {
        self.read().len()
    }

    /// 把当前词表写入 MessagePack 快照
    pub async fn save_snapshot(&self, path: &Path) -> FilterResult<()> {
        let words = self.words();
        debug!("保存词表快照：{}，词条数：{}", path.display(), words.len());
        VocabularySnapshot::save(path, &words).await
    }
}
