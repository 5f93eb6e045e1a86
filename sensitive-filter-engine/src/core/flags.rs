use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// 词条分类位掩码
/// 四个互相独立的分类位，重复插入同一词条时按位或合并
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFlags(u8);

impl WordFlags {
    /// 违法
    pub const ILLEGAL: WordFlags = WordFlags(1);
    /// 敏感
    pub const SENSITIVE: WordFlags = WordFlags(1 << 1);
    /// 静默
    pub const SILENCE: WordFlags = WordFlags(1 << 2);
    /// 替换
    pub const REPLACE: WordFlags = WordFlags(1 << 3);

    const ALL_BITS: u8 = 0b1111;

    const NAMED: [(&'static str, WordFlags); 4] = [
        ("illegal", Self::ILLEGAL),
        ("sensitive", Self::SENSITIVE),
        ("silence", Self::SILENCE),
        ("replace", Self::REPLACE),
    ];

    #[inline(always)]
    pub const fn empty() -> Self {
        WordFlags(0)
    }

    /// 从原始比特构建，拒绝四个分类位以外的比特
    pub fn from_bits(bits: u8) -> CoreResult<Self> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(CoreError::InvalidFlagBits(bits));
        }
        Ok(WordFlags(bits))
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, other: WordFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub fn insert(&mut self, other: WordFlags) {
        self.0 |= other.0;
    }

    #[inline(always)]
    pub const fn union(self, other: WordFlags) -> Self {
        WordFlags(self.0 | other.0)
    }

    pub const fn is_illegal(self) -> bool {
        self.contains(Self::ILLEGAL)
    }

    pub const fn is_sensitive(self) -> bool {
        self.contains(Self::SENSITIVE)
    }

    pub const fn is_silence(self) -> bool {
        self.contains(Self::SILENCE)
    }

    pub const fn is_replace(self) -> bool {
        self.contains(Self::REPLACE)
    }

    /// 由四个布尔值折叠为位掩码
    pub fn from_bools(illegal: bool, sensitive: bool, silence: bool, replace: bool) -> Self {
        let mut flags = WordFlags::empty();
        for (set, flag) in [
            (illegal, Self::ILLEGAL),
            (sensitive, Self::SENSITIVE),
            (silence, Self::SILENCE),
            (replace, Self::REPLACE),
        ] {
            if set {
                flags.insert(flag);
            }
        }
        flags
    }
}

impl BitOr for WordFlags {
    type Output = WordFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for WordFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

/// 解析分类标记文本
/// 支持两种写法：
/// - 名称列表：`illegal,sensitive` / `silence|replace`（不区分大小写）
/// - 十进制位掩码：`5`
impl FromStr for WordFlags {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(WordFlags::empty());
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            let bits = s
                .parse::<u8>()
                .map_err(|_| CoreError::UnknownFlag(s.to_string()))?;
            return WordFlags::from_bits(bits);
        }

        let mut flags = WordFlags::empty();
        for name in s.split([',', '|']).map(str::trim).filter(|n| !n.is_empty()) {
            let flag = Self::NAMED
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| CoreError::UnknownFlag(name.to_string()))?;
            flags.insert(flag);
        }
        Ok(flags)
    }
}

impl Display for WordFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
