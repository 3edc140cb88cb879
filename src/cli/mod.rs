use crate::config::{Config, LLMProvider};
use crate::i18n::TargetLanguage;
use crate::types::ResearchRequest;
use clap::Parser;
use std::path::PathBuf;

/// ScholarTree-RS - 由Rust与AI驱动的研究树生成引擎
#[derive(Parser, Debug)]
#[command(name = "Arbor (scholartree-rs)")]
#[command(
    about = "AI-based research-tree engine for academic literature. It decomposes a natural-language research question into targeted search queries, fans them out to arXiv, scores every paper's relevance to the original question, and delivers an aggregate tree or an incremental event stream."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 自然语言研究问题
    pub query: String,

    /// 输出路径
    #[arg(short, long, default_value = "./arbor.results")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 以增量事件流（NDJSON）方式输出到stdout
    #[arg(long)]
    pub stream: bool,

    /// 每个子查询的检索条数上限
    #[arg(long)]
    pub max_results_per_query: Option<usize>,

    /// 生成的子查询数量上限
    #[arg(long)]
    pub max_queries: Option<usize>,

    /// LLM Provider (gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型名称
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 结果语言 (en, zh, ja)
    #[arg(long)]
    pub target_language: Option<String>,

    /// 是否禁用缓存
    #[arg(long)]
    pub no_cache: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数合并为运行配置与研究请求。
    /// 优先级：显式CLI参数 > 配置文件 > 默认值
    pub fn into_parts(self) -> (Config, ResearchRequest) {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("arbor.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        config.output_path = self.output_path;

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 结果语言配置
        if let Some(target_language_str) = self.target_language {
            if let Ok(target_language) = target_language_str.parse::<TargetLanguage>() {
                config.target_language = target_language;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的结果语言: {}，使用默认语言 (English)",
                    target_language_str
                );
            }
        }

        // 缓存配置
        if self.no_cache {
            config.cache.enabled = false;
        }

        // 其他配置
        config.stream = config.stream || self.stream;
        config.verbose = self.verbose;

        // 组装研究请求：CLI未指定的上限取配置默认值
        let request = ResearchRequest {
            natural_language_query: self.query,
            max_results_per_query: self
                .max_results_per_query
                .unwrap_or(config.default_max_results_per_query),
            max_queries: self.max_queries.unwrap_or(config.default_max_queries),
        };

        (config, request)
    }
}

// Include tests
#[cfg(test)]
mod tests;
