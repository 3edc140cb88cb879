//! LLM Provider支持模块

use anyhow::Result;
use rig::{
    agent::Agent,
    client::CompletionClient,
    completion::Prompt,
    providers::gemini::completion::gemini_api_types::{AdditionalParameters, GenerationConfig},
};

use crate::config::{LLMConfig, LLMProvider};

/// 统一的Provider客户端枚举
#[derive(Clone)]
pub enum ProviderClient {
    Gemini(rig::providers::gemini::Client),
    Ollama(rig::providers::ollama::Client),
}

impl ProviderClient {
    /// 根据配置创建相应的provider客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        match config.provider {
            LLMProvider::Gemini => {
                let client = rig::providers::gemini::Client::builder(&config.api_key).build()?;
                Ok(ProviderClient::Gemini(client))
            }
            LLMProvider::Ollama => {
                let client = rig::providers::ollama::Client::builder().build();
                Ok(ProviderClient::Ollama(client))
            }
        }
    }

    /// 创建Agent
    pub fn create_agent(&self, model: &str, config: &LLMConfig) -> ProviderAgent {
        match self {
            ProviderClient::Gemini(client) => {
                let gen_cfg = GenerationConfig::default();
                let cfg = AdditionalParameters::default().with_config(gen_cfg);

                let agent = client
                    .agent(model)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .additional_params(serde_json::to_value(cfg).unwrap())
                    .build();
                ProviderAgent::Gemini(agent)
            }
            ProviderClient::Ollama(client) => {
                let agent = client
                    .agent(model)
                    .max_tokens(config.max_tokens.into())
                    .temperature(config.temperature)
                    .build();
                ProviderAgent::Ollama(agent)
            }
        }
    }
}

/// 统一的Agent枚举
pub enum ProviderAgent {
    Gemini(Agent<rig::providers::gemini::completion::CompletionModel>),
    Ollama(Agent<rig::providers::ollama::CompletionModel<reqwest::Client>>),
}

impl ProviderAgent {
    /// 执行prompt
    pub async fn prompt(&self, prompt: &str) -> Result<String> {
        match self {
            ProviderAgent::Gemini(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::Ollama(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
        }
    }
}
