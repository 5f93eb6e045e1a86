//! 敏感词字典树
//! 单根节点、按码点建边；词条末尾节点携带分类位掩码
mod noise;
mod scanner;

pub use noise::{NoiseSet, EMPTY_NOISE};
pub use scanner::WordMatch;

use crate::core::{Node, Word, WordFlags};

/// 敏感词字典树
/// 独占所有节点，节点间没有回指父节点的引用
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    /// 当前被标记的词条末尾节点数
    marked: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// 插入词条
    /// 逐码点创建路径，在末尾节点按位或合并分类标记
    /// 空文本不建任何边，直接忽略
    pub fn add<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut inserted = 0usize;
        for word in words {
            if word.text.is_empty() {
                log::debug!("Skip empty word on insert");
                continue;
            }

            let node = word
                .text
                .chars()
                .fold(&mut self.root, |node, ch| node.child_or_insert(ch));

            if node.mark(word.flags()) {
                self.marked += 1;
            }
            inserted += 1;
        }
        log::debug!("Trie add: words={} marked={}", inserted, self.marked);
    }

    /// 删除词条
    /// 路径完整存在时清除末尾节点的分类数据；不裁剪已无用的边
    /// 路径不存在时静默忽略
    pub fn del<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }

            let mut node = Some(&mut self.root);
            for ch in name.chars() {
                node = node.and_then(|n| n.child_mut(ch));
            }

            if node.is_some_and(Node::unmark) {
                self.marked -= 1;
                log::debug!("Trie del: word={} marked={}", name, self.marked);
            } else {
                log::debug!("Trie del: word={} not present, skip", name);
            }
        }
    }

    /// 全文扫描，返回按匹配文本去重后的词条（保留首次出现顺序）
    pub fn find_all(&self, text: &str, noise: &NoiseSet) -> Vec<Word> {
        scanner::dedup_by_text(self.find_matches(text, noise))
    }

    /// 全文扫描，返回每一次命中（不去重，附带码点区间）
    pub fn find_matches(&self, text: &str, noise: &NoiseSet) -> Vec<WordMatch> {
        let runes: Vec<char> = text.chars().collect();
        let matches = scanner::scan(&self.root, &runes, noise);
        log::debug!(
            "Trie scan: text=\"{}\" chars={} noise={} hits={}",
            crate::utils::preview_compact(text, 32),
            runes.len(),
            noise.len(),
            matches.len()
        );
        matches
    }

    /// 将带 REPLACE 标记的命中区间整体替换为掩码字符（区间内的噪音字符一并替换）
    pub fn replace(&self, text: &str, noise: &NoiseSet, mask: char) -> String {
        let mut runes: Vec<char> = text.chars().collect();
        let matches = scanner::scan(&self.root, &runes, noise);

        for hit in matches.iter().filter(|m| m.flags.is_replace()) {
            runes[hit.start..hit.end].fill(mask);
        }
        runes.into_iter().collect()
    }

    /// 导出当前词表（所有被标记的节点）
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.marked);
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut words);
        words
    }

    /// 当前词条数
    pub fn len(&self) -> usize {
        self.marked
    }

    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }

    /// 查询某个词条当前的分类位（未收录返回 None）
    pub fn flags_of(&self, name: &str) -> Option<WordFlags> {
        name.chars()
            .try_fold(&self.root, |node, ch| node.child(ch))
            .and_then(Node::flags)
    }
}

/// 深度优先收集被标记的节点
fn collect_words(node: &Node, path: &mut String, out: &mut Vec<Word>) {
    if let Some(flags) = node.flags() {
        out.push(Word::with_flags(path.clone(), flags));
    }
    for (ch, child) in node.children() {
        path.push(ch);
        collect_words(child, path, out);
        path.pop();
    }
}
