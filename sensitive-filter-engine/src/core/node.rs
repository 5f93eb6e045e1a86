use rustc_hash::FxHashMap;

use super::flags::WordFlags;

/// 字典树节点
/// - children：按字符（Unicode码点）索引的子节点
/// - data：仅词条末尾节点持有分类位掩码，中间节点恒为 None
#[derive(Debug, Default)]
pub struct Node {
    children: FxHashMap<char, Node>,
    data: Option<WordFlags>,
}

impl Node {
    #[inline(always)]
    pub fn child(&self, ch: char) -> Option<&Node> {
        self.children.get(&ch)
    }

    #[inline(always)]
    pub(crate) fn child_mut(&mut self, ch: char) -> Option<&mut Node> {
        self.children.get_mut(&ch)
    }

    /// 获取子节点，不存在则创建
    #[inline(always)]
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut Node {
        self.children.entry(ch).or_default()
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> + '_ {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    #[inline(always)]
    pub fn flags(&self) -> Option<WordFlags> {
        self.data
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.data.is_some()
    }

    /// 合并分类位，返回该节点此前是否未被标记
    pub(crate) fn mark(&mut self, flags: WordFlags) -> bool {
        match self.data.as_mut() {
            Some(existing) => {
                existing.insert(flags);
                false
            }
            None => {
                self.data = Some(flags);
                true
            }
        }
    }

    /// 清除分类数据，返回该节点此前是否被标记
    pub(crate) fn unmark(&mut self) -> bool {
        self.data.take().is_some()
    }
}
