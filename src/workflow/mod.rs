use anyhow::Result;

use crate::config::Config;
use crate::outlet;
use crate::research::{self, ResearchContext};
use crate::types::ResearchRequest;

/// 启动研究树生成工作流
pub async fn launch(config: &Config, request: &ResearchRequest) -> Result<()> {
    let context = ResearchContext::new(config.clone())?;

    if config.verbose {
        eprintln!(
            "🔧 Provider: {} / 模型: {} / 子查询上限: {} / 每条检索上限: {}",
            config.llm.provider, config.llm.model, request.max_queries, request.max_results_per_query
        );
    }

    // 启动时检查模型连接。失败只告警不中断：
    // 计划生成与评分各自带兜底，单次探测失败不能否定整个请求
    if context.llm_client.check_connection().await.is_err() {
        eprintln!("⚠️ 模型连接检查未通过，流程将以降级方式继续");
    }

    if config.stream {
        outlet::stream_to_stdout(&context, request).await
    } else {
        let tree = research::execute(&context, request).await?;
        outlet::save(&context, &tree).await
    }
}

// Include tests
#[cfg(test)]
mod tests;
