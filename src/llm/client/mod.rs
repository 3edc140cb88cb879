//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

use crate::cache::CacheManager;
use crate::config::Config;
use crate::llm::TextGenerator;

mod providers;

use providers::ProviderClient;

/// LLM响应缓存的分类目录名
const CACHE_CATEGORY: &str = "completions";

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: crate::config::LLMConfig,
    client: ProviderClient,
    cache: CacheManager,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: &Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        let cache = CacheManager::new(config.cache.clone());
        Ok(Self {
            config: config.llm.clone(),
            client,
            cache,
        })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        match self.prompt_uncached("Hello").await {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let max_retries = self.config.retry_attempts;
        let retry_delay_ms = self.config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {}次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 单轮文本生成，不读写缓存
    async fn prompt_uncached(&self, prompt: &str) -> Result<String> {
        let agent = self.client.create_agent(&self.config.model, &self.config);
        self.retry_with_backoff(|| async { agent.prompt(prompt).await })
            .await
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    /// 单轮文本生成，优先命中本地缓存
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        if let Some(cached) = self.cache.get::<String>(CACHE_CATEGORY, prompt).await {
            return Ok(cached);
        }

        let response = self.prompt_uncached(prompt).await?;

        if let Err(e) = self
            .cache
            .set(CACHE_CATEGORY, prompt, response.clone())
            .await
        {
            eprintln!("⚠️ 写入LLM响应缓存失败: {}", e);
        }

        Ok(response)
    }
}
