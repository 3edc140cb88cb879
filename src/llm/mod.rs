//! LLM能力接口与客户端实现

use anyhow::Result;
use async_trait::async_trait;

pub mod client;

pub use client::LLMClient;

/// 文本生成能力接口。
/// 研究管线只依赖这一个方法，后端在构造期一次性选定
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}
