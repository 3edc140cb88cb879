use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::i18n::TargetLanguage;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "gemini")]
    #[default]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// 输出路径
    pub output_path: PathBuf,

    /// 结果语言（只影响降级文案，发给模型的prompt始终为英文）
    pub target_language: TargetLanguage,

    /// 以增量事件流方式输出结果
    pub stream: bool,

    /// 每个子查询的默认检索条数
    pub default_max_results_per_query: usize,

    /// 默认生成的子查询数量上限
    pub default_max_queries: usize,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// arXiv检索配置
    pub search: SearchConfig,

    /// 缓存配置
    pub cache: CacheConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// 模型名称
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,
}

/// arXiv检索配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// arXiv API基地址
    pub api_base_url: String,

    /// 请求超时时间（秒）
    pub timeout_seconds: u64,

    /// 连接超时时间（秒）
    pub connect_timeout_seconds: u64,

    /// 相邻两次请求的最小间隔（秒），arXiv接口礼仪要求
    pub min_request_interval_secs: u64,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,

    /// 缓存目录
    pub cache_dir: PathBuf,

    /// 缓存过期时间（小时）
    pub expire_hours: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("./arbor.results"),
            target_language: TargetLanguage::default(),
            stream: false,
            default_max_results_per_query: 5,
            default_max_queries: 5,
            llm: LLMConfig::default(),
            search: SearchConfig::default(),
            cache: CacheConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("ARBOR_LLM_API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .unwrap_or_default(),
            model: String::from("gemini-2.0-flash"),
            max_tokens: 8192,
            temperature: 0.1,
            retry_attempts: 3,
            retry_delay_ms: 2000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://export.arxiv.org/api/query"),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            min_request_interval_secs: 3,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: PathBuf::from(".arbor/cache"),
            expire_hours: 168,
        }
    }
}
