//! 词表快照管理
//! 仅处理词表的本地序列化（MessagePack）和反序列化

use std::path::Path;

use rmp_serde::{Serializer, from_slice};
use sensitive_filter_engine::Word;
use serde::Serialize;
use tracing::debug;

use crate::error::{FilterError, FilterResult};

/// 词表快照管理器
pub struct VocabularySnapshot;

impl VocabularySnapshot {
    /// 从本地快照加载词表
    pub async fn load(path: &Path) -> FilterResult<Vec<Word>> {
        let data = tokio::fs::read(path).await?;

        let words: Vec<Word> = from_slice(&data)
            .map_err(|e| FilterError::SnapshotError(format!("反序列化失败：{}", e)))?;

        debug!("快照反序列化成功，路径：{}，词条数：{}", path.display(), words.len());
        Ok(words)
    }

    /// 将词表写入本地快照（目录不存在时自动创建）
    pub async fn save(path: &Path, words: &[Word]) -> FilterResult<()> {
        let mut data = Vec::new();
        words
            .serialize(&mut Serializer::new(&mut data))
            .map_err(|e| FilterError::SnapshotError(format!("序列化失败：{}", e)))?;

        debug!("词表序列化成功，词条数：{}，数据大小：{} 字节", words.len(), data.len());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    /// 清除本地快照
    pub async fn clear(path: &Path) -> FilterResult<()> {
        if tokio::fs::try_exists(path).await? {
            tokio::fs::remove_file(path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sensitive-filter-snapshot-{}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn test_snapshot_round_trip_and_clear() {
        // 测试场景：保存后再加载，词条与分类保持一致；清除后文件不存在
        let path = temp_path("round_trip.mp");
        let words = vec![
            Word::new("你好"),
            Word::new("fuck").silence(),
            Word::new("赌博").illegal().replace(),
        ];

        VocabularySnapshot::save(&path, &words).await.unwrap();
        let loaded = VocabularySnapshot::load(&path).await.unwrap();
        assert_eq!(loaded, words);

        VocabularySnapshot::clear(&path).await.unwrap();
        assert!(!path.exists());
        // 重复清除不报错
        VocabularySnapshot::clear(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_corrupted_snapshot() {
        let path = temp_path("corrupted.mp");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, b"\xc1not msgpack").await.unwrap();

        let err = VocabularySnapshot::load(&path).await.unwrap_err();
        assert!(matches!(err, FilterError::SnapshotError(_)));
        VocabularySnapshot::clear(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_snapshot() {
        let err = VocabularySnapshot::load(&temp_path("missing.mp")).await.unwrap_err();
        assert!(matches!(err, FilterError::IoError(_)));
    }
}
