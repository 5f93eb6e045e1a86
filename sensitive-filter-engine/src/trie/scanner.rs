use rustc_hash::FxHashSet;

use super::noise::NoiseSet;
use crate::core::{Node, Word, WordFlags};

/// 单次命中
/// start/end 为被扫描文本中的码点下标，区间左闭右开，可能包含被跳过的噪音字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: Word,
    pub flags: WordFlags,
    pub start: usize,
    pub end: usize,
}

impl WordMatch {
    fn new(runes: &[char], start: usize, end: usize, flags: WordFlags) -> Self {
        Self {
            word: Word::with_flags(runes[start..end].iter().collect::<String>(), flags),
            flags,
            start,
            end,
        }
    }
}

/// 单遍扫描：失配即从下一个起点重试，匹配中途允许跳过噪音字符
///
/// 状态：
/// - parent：当前所在节点（起始为根）
/// - cursor：本轮候选匹配的起点
/// - position：当前扫描位置
/// - in_match：本轮是否已经命中过至少一个真实字符（只有此时噪音字符才可跳过）
///
/// 失配或扫到文本末尾时，回到根节点并把起点右移一位；
/// 不使用 Aho-Corasick 失败指针，最坏 O(n·m)
pub(super) fn scan(root: &Node, runes: &[char], noise: &NoiseSet) -> Vec<WordMatch> {
    let mut matches = Vec::new();
    let Some(last) = runes.len().checked_sub(1) else {
        return matches;
    };

    let mut parent = root;
    let mut cursor = 0usize;
    let mut position = 0usize;
    let mut in_match = false;

    while position < runes.len() {
        let ch = runes[position];

        match parent.child(ch) {
            // 噪音字符：保留当前候选，直接看下一个字符
            None if in_match && !noise.is_empty() && noise.contains(ch) => {
                position += 1;
                continue;
            }
            // 失配：从 cursor + 1 重新开始
            None => {
                parent = root;
                position = cursor;
                cursor += 1;
                in_match = false;
            }
            Some(node) => {
                parent = node;
                in_match = true;
                if let Some(flags) = node.flags() {
                    if cursor <= position {
                        matches.push(WordMatch::new(runes, cursor, position + 1, flags));
                    }
                }
            }
        }

        // 扫到末尾：本轮结束，起点右移一位继续
        if position == last {
            parent = root;
            position = cursor;
            cursor += 1;
            in_match = false;
        }

        position += 1;
    }

    matches
}

/// 按匹配文本去重，保留首次出现的顺序
pub(super) fn dedup_by_text(matches: Vec<WordMatch>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.word.text.clone()))
        .map(|m| m.word)
        .collect()
}
