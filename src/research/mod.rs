// 研究树生成管线
// 流程：自然语言问题 → 计划生成（LLM分解为子查询） → 逐条子查询检索arXiv
// → 逐篇论文对照原始问题评分 → 节点聚合与去重 → 聚合树或事件流交付

use anyhow::Result;
use tokio::sync::mpsc;

use crate::types::{ResearchRequest, ResearchTree};

pub mod assembler;
pub mod context;
pub mod emitter;
pub mod parser;
pub mod planner;
pub mod scorer;

pub use context::ResearchContext;
pub use emitter::ResearchEvent;

/// 执行研究流程（聚合模式）
pub async fn execute(context: &ResearchContext, request: &ResearchRequest) -> Result<ResearchTree> {
    emitter::emit_aggregate(
        &context.llm_client,
        context.arxiv_client.as_ref(),
        request,
        &context.config.target_language,
    )
    .await
}

/// 执行研究流程（流式模式），事件经由channel推送给消费方。
/// 取值语义便于在独立task中运行（消费方在另一端接收）
pub async fn execute_streaming(
    context: ResearchContext,
    request: ResearchRequest,
    tx: mpsc::Sender<ResearchEvent>,
) -> Result<()> {
    emitter::emit_stream(
        &context.llm_client,
        context.arxiv_client.as_ref(),
        &request,
        &context.config.target_language,
        tx,
    )
    .await
}
