use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// 全局空噪音集（无噪音扫描复用，零分配）
pub static EMPTY_NOISE: Lazy<NoiseSet> = Lazy::new(NoiseSet::default);

/// 噪音字符集
/// 匹配进行中遇到集合内字符时跳过，不打断当前候选词
/// 每个码点单独判断是否属于集合，不做任何正则/区间解析
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseSet {
    chars: FxHashSet<char>,
}

impl NoiseSet {
    pub fn new(noise: &str) -> Self {
        Self {
            chars: noise.chars().collect(),
        }
    }

    #[inline(always)]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

impl From<&str> for NoiseSet {
    fn from(noise: &str) -> Self {
        Self::new(noise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_membership_by_codepoint() {
        // 测试场景：重复字符只计一次，多字节字符按码点判断
        let noise = NoiseSet::new("*~*，");
        assert_eq!(noise.len(), 3);
        assert!(noise.contains('*'));
        assert!(noise.contains('，'));
        assert!(!noise.contains(','));
        assert!(EMPTY_NOISE.is_empty());
    }
}
