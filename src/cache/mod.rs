use anyhow::Result;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

use crate::config::CacheConfig;

/// 缓存管理器，按prompt哈希落盘缓存LLM响应。
/// 研究树本身不做任何持久化，仅缓存模型补全结果
#[derive(Clone)]
pub struct CacheManager {
    config: CacheConfig,
}

/// 缓存条目
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: u64,
    /// prompt的MD5哈希值，用于缓存键的生成和验证
    pub prompt_hash: String,
}

impl CacheManager {
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    /// 生成prompt的MD5哈希
    pub fn hash_prompt(&self, prompt: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(prompt.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 获取缓存文件路径
    fn get_cache_path(&self, category: &str, hash: &str) -> PathBuf {
        self.config
            .cache_dir
            .join(category)
            .join(format!("{}.json", hash))
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    /// 检查缓存是否过期
    fn is_expired(&self, timestamp: u64) -> bool {
        let expire_seconds = self.config.expire_hours * 3600;
        Self::now_secs().saturating_sub(timestamp) > expire_seconds
    }

    /// 获取缓存
    pub async fn get<T>(&self, category: &str, prompt: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !self.config.enabled {
            return None;
        }

        let hash = self.hash_prompt(prompt);
        let cache_path = self.get_cache_path(category, &hash);

        if !cache_path.exists() {
            return None;
        }

        let content = fs::read_to_string(&cache_path).await.ok()?;
        match serde_json::from_str::<CacheEntry<T>>(&content) {
            Ok(entry) => {
                if self.is_expired(entry.timestamp) {
                    // 删除过期缓存
                    let _ = fs::remove_file(&cache_path).await;
                    return None;
                }
                Some(entry.data)
            }
            Err(e) => {
                eprintln!("⚠️ 缓存反序列化失败，忽略该条目: {}", e);
                None
            }
        }
    }

    /// 设置缓存
    pub async fn set<T>(&self, category: &str, prompt: &str, data: T) -> Result<()>
    where
        T: Serialize,
    {
        if !self.config.enabled {
            return Ok(());
        }

        let hash = self.hash_prompt(prompt);
        let cache_path = self.get_cache_path(category, &hash);

        // 确保目录存在
        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let entry = CacheEntry {
            data,
            timestamp: Self::now_secs(),
            prompt_hash: hash,
        };

        let content = serde_json::to_string(&entry)?;
        fs::write(&cache_path, content).await?;
        Ok(())
    }
}

// Include tests
#[cfg(test)]
mod tests;
