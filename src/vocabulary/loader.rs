//! 词表加载管理器
//! 负责从配置指定的来源读取词条，不做任何远程拉取

use std::path::Path;

use sensitive_filter_engine::Word;
use tracing::{debug, info};

use super::snapshot::VocabularySnapshot;
use crate::config::VocabularySource;
use crate::error::{FilterError, FilterResult};

/// 词表加载管理器
pub struct VocabularyLoader;

impl VocabularyLoader {
    /// 按来源加载词表
    pub async fn load(source: &VocabularySource) -> FilterResult<Vec<Word>> {
        let words = match source {
            VocabularySource::Empty => Vec::new(),
            VocabularySource::Words(words) => words.clone(),
            VocabularySource::JsonFile(path) => Self::load_json(path).await?,
            VocabularySource::TextFile(path) => Self::load_text(path).await?,
            VocabularySource::Snapshot(path) => VocabularySnapshot::load(path).await?,
        };
        info!("词表加载完成，来源：{}，词条数：{}", Self::describe(source), words.len());
        Ok(words)
    }

    /// JSON 词表：Word 对象数组，分类字段可省略
    pub async fn load_json(path: &Path) -> FilterResult<Vec<Word>> {
        let content = tokio::fs::read(path).await.map_err(|e| {
            FilterError::VocabularyLoadError(format!("读取词表文件失败：{} - {}", path.display(), e))
        })?;
        let words: Vec<Word> = serde_json::from_slice(&content)?;
        debug!("JSON词表解析成功：{}，词条数：{}", path.display(), words.len());
        Ok(words)
    }

    /// 文本词表：每行一个词条，`词条<TAB>分类`，空行与 `#` 注释行忽略
    pub async fn load_text(path: &Path) -> FilterResult<Vec<Word>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FilterError::VocabularyLoadError(format!("读取词表文件失败：{} - {}", path.display(), e))
        })?;
        let words = Self::parse_text(path, &content)?;
        debug!("文本词表解析成功：{}，词条数：{}", path.display(), words.len());
        Ok(words)
    }

    /// 解析文本词表内容，错误带上1起始的行号
    pub fn parse_text(path: &Path, content: &str) -> FilterResult<Vec<Word>> {
        content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| match Word::parse_line(line) {
                Ok(Some(word)) => Some(Ok(word)),
                Ok(None) => None,
                Err(source) => Some(Err(FilterError::VocabularyLineError {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                })),
            })
            .collect()
    }

    fn describe(source: &VocabularySource) -> String {
        match source {
            VocabularySource::Empty => "empty".to_string(),
            VocabularySource::Words(_) => "inline".to_string(),
            VocabularySource::JsonFile(path) => format!("json:{}", path.display()),
            VocabularySource::TextFile(path) => format!("text:{}", path.display()),
            VocabularySource::Snapshot(path) => format!("snapshot:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    async fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sensitive-filter-loader-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join(name);
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_json_vocabulary() {
        // 测试场景：JSON 数组，省略的分类字段默认为 false
        let path = write_temp(
            "words.json",
            r#"[{"text":"你好"},{"text":"fuck","is_silence":true}]"#,
        )
        .await;

        let words = VocabularyLoader::load(&VocabularySource::JsonFile(path)).await.unwrap();
        assert_eq!(words, vec![Word::new("你好"), Word::new("fuck").silence()]);
    }

    #[tokio::test]
    async fn test_load_text_vocabulary() {
        let path = write_temp(
            "words.txt",
            "# 词表\n你好\n\nfuck\tsilence\n赌博\tillegal,replace\n",
        )
        .await;

        let words = VocabularyLoader::load(&VocabularySource::TextFile(path)).await.unwrap();
        assert_eq!(
            words,
            vec![
                Word::new("你好"),
                Word::new("fuck").silence(),
                Word::new("赌博").illegal().replace(),
            ]
        );
    }

    #[test]
    fn test_parse_text_reports_line_number() {
        // 测试场景：第3行分类名称非法，错误应指向第3行
        let err = VocabularyLoader::parse_text(Path::new("bad.txt"), "你好\n# ok\nfuck\trude\n")
            .unwrap_err();
        match err {
            FilterError::VocabularyLineError { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_inline_and_empty() {
        let inline = VocabularySource::Words(vec![Word::new("你好")]);
        assert_eq!(VocabularyLoader::load(&inline).await.unwrap().len(), 1);
        assert!(VocabularyLoader::load(&VocabularySource::Empty).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let source = VocabularySource::TextFile(PathBuf::from("/nonexistent/sensitive/words.txt"));
        let err = VocabularyLoader::load(&source).await.unwrap_err();
        assert!(matches!(err, FilterError::VocabularyLoadError(_)));
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let path = write_temp("broken.json", "{not json").await;
        let err = VocabularyLoader::load(&VocabularySource::JsonFile(path)).await.unwrap_err();
        assert!(matches!(err, FilterError::JsonError(_)));
    }
}
