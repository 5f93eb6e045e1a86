use std::fmt::{self, Write};

/// 日志用文本预览：按字符截断 + 空白折叠，不分配堆内存
/// 待扫描文本可能很长，debug日志中只展示前 max_chars 个字符
#[inline(always)]
pub fn preview_compact(s: &str, max_chars: usize) -> impl fmt::Display + '_ {
    struct Preview<'a> {
        source: &'a str,
        max_chars: usize,
    }

    impl fmt::Display for Preview<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut written = 0;
            let mut in_whitespace = false;
            for ch in self.source.chars() {
                if written == self.max_chars {
                    return f.write_char('…');
                }
                match (ch.is_whitespace(), in_whitespace) {
                    (true, true) => continue,
                    (true, false) => f.write_char(' ')?,
                    (false, _) => f.write_char(ch)?,
                }
                in_whitespace = ch.is_whitespace();
                written += 1;
            }
            Ok(())
        }
    }

    Preview {
        source: s,
        max_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_by_char() {
        assert_eq!(preview_compact("你好世界", 2).to_string(), "你好…");
        assert_eq!(preview_compact("你好", 2).to_string(), "你好");
    }

    #[test]
    fn test_preview_folds_whitespace() {
        assert_eq!(preview_compact("a \n\t b", 10).to_string(), "a b");
    }
}
