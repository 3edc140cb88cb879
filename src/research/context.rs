use std::sync::Arc;

use anyhow::Result;

use crate::arxiv::ArxivClient;
use crate::config::Config;
use crate::llm::LLMClient;

/// 单次运行的上下文，持有全部外部协作方
#[derive(Clone)]
pub struct ResearchContext {
    /// LLM调用器，用于与AI通信
    pub llm_client: LLMClient,
    /// arXiv检索客户端
    pub arxiv_client: Arc<ArxivClient>,
    /// 配置
    pub config: Config,
}

impl ResearchContext {
    /// 创建新的研究上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(&config)?;
        let arxiv_client = Arc::new(ArxivClient::new(&config.search)?);

        Ok(Self {
            llm_client,
            arxiv_client,
            config,
        })
    }
}
