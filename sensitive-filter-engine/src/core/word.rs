use serde::{Deserialize, Serialize};

use super::flags::WordFlags;
use crate::error::{CoreError, CoreResult};

/// 词条：待检测的文本 + 四个独立的分类标记
/// 扫描结果返回的是拷贝，不会引用字典树内部节点
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub is_illegal: bool,
    #[serde(default)]
    pub is_sensitive: bool,
    #[serde(default)]
    pub is_silence: bool,
    #[serde(default)]
    pub is_replace: bool,
}

impl Word {
    /// 无任何分类标记的词条
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// 按位掩码展开四个分类标记
    pub fn with_flags(text: impl Into<String>, flags: WordFlags) -> Self {
        Self {
            text: text.into(),
            is_illegal: flags.is_illegal(),
            is_sensitive: flags.is_sensitive(),
            is_silence: flags.is_silence(),
            is_replace: flags.is_replace(),
        }
    }

    pub fn illegal(mut self) -> Self {
        self.is_illegal = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.is_sensitive = true;
        self
    }

    pub fn silence(mut self) -> Self {
        self.is_silence = true;
        self
    }

    pub fn replace(mut self) -> Self {
        self.is_replace = true;
        self
    }

    /// 四个布尔标记折叠后的位掩码
    #[inline(always)]
    pub fn flags(&self) -> WordFlags {
        WordFlags::from_bools(
            self.is_illegal,
            self.is_sensitive,
            self.is_silence,
            self.is_replace,
        )
    }

    /// 解析词表文本中的一行
    /// 格式：`词条` 或 `词条<TAB>分类`
    /// - 空行 / `#` 开头的注释行返回 None
    /// - 分类写法见 [`WordFlags`] 的 `FromStr`
    pub fn parse_line(line: &str) -> CoreResult<Option<Word>> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None);
        }

        let (text, flags) = match line.split_once('\t') {
            Some((text, raw_flags)) => (text, raw_flags.parse::<WordFlags>()?),
            None => (line, WordFlags::empty()),
        };

        if text.is_empty() {
            return Err(CoreError::InvalidWordLine(format!(
                "empty word text before flags: {:?}",
                line
            )));
        }

        Ok(Some(Word::with_flags(text, flags)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let word = Word::new("fuck").silence().replace();
        assert_eq!(word.flags(), WordFlags::SILENCE | WordFlags::REPLACE);
        assert_eq!(Word::with_flags("fuck", word.flags()), word);
    }

    #[test]
    fn test_parse_line_plain_and_flagged() {
        // 测试场景：无分类标记的词条
        let plain = Word::parse_line("你好\n").unwrap().unwrap();
        assert_eq!(plain, Word::new("你好"));

        // 测试场景：带分类标记的词条
        let flagged = Word::parse_line("赌博\tillegal,replace\r\n").unwrap().unwrap();
        assert!(flagged.is_illegal);
        assert!(flagged.is_replace);
        assert!(!flagged.is_sensitive);
    }

    #[test]
    fn test_parse_line_skips_blank_and_comment() {
        assert_eq!(Word::parse_line("").unwrap(), None);
        assert_eq!(Word::parse_line("   ").unwrap(), None);
        assert_eq!(Word::parse_line("# 注释").unwrap(), None);
    }

    #[test]
    fn test_parse_line_rejects_empty_text() {
        let err = Word::parse_line("\tillegal").unwrap_err();
        assert!(matches!(err, CoreError::InvalidWordLine(_)));
    }

    #[test]
    fn test_json_flags_default_to_false() {
        let word: Word = serde_json::from_str(r#"{"text":"fuck","is_silence":true}"#).unwrap();
        assert_eq!(word, Word::new("fuck").silence());
    }
}
