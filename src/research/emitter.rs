//! 结果投递 - 同一套流程的两种交付形态：一次性的聚合树，或逐节点的增量事件流

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::arxiv::PaperSource;
use crate::i18n::TargetLanguage;
use crate::llm::TextGenerator;
use crate::research::assembler::{assemble_tree, build_query_node};
use crate::research::planner::generate_research_plan;
use crate::types::{ResearchRequest, ResearchTree, ScoredPaper, SubqueryPlan};

/// 流式模式下推送的事件。
/// `queries`事件恒为首个；随后每完成一个节点推送一个`papers`事件，顺序等于派发顺序。
/// 流式模式不汇总总数，消费方按需自行累计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResearchEvent {
    #[serde(rename = "queries")]
    Queries {
        original_query: String,
        research_goal: String,
        queries: Vec<SubqueryPlan>,
    },
    #[serde(rename = "papers")]
    Papers {
        query: String,
        description: String,
        papers: Vec<ScoredPaper>,
        /// 仅当该子查询的检索失败时出现
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// 聚合模式：跑完整个流程后返回完整的研究树
pub async fn emit_aggregate<G, S>(
    llm: &G,
    source: &S,
    request: &ResearchRequest,
    lang: &TargetLanguage,
) -> Result<ResearchTree>
where
    G: TextGenerator,
    S: PaperSource,
{
    assemble_tree(llm, source, request, lang).await
}

/// 流式模式：计划一生成就推送`queries`事件，之后每完成一个节点推送一个`papers`事件。
/// 消费方断开（接收端被丢弃）时，当前在途节点完成后即停止，不再调度后续子查询
pub async fn emit_stream<G, S>(
    llm: &G,
    source: &S,
    request: &ResearchRequest,
    lang: &TargetLanguage,
    tx: mpsc::Sender<ResearchEvent>,
) -> Result<()>
where
    G: TextGenerator,
    S: PaperSource,
{
    let (research_goal, query_plans) = generate_research_plan(
        llm,
        &request.natural_language_query,
        request.max_queries,
    )
    .await;

    let queries_event = ResearchEvent::Queries {
        original_query: request.natural_language_query.clone(),
        research_goal,
        queries: query_plans.clone(),
    };
    if tx.send(queries_event).await.is_err() {
        eprintln!("⚠️ 消费方已断开，停止推送");
        return Ok(());
    }

    for plan in &query_plans {
        if tx.is_closed() {
            eprintln!("⚠️ 消费方已断开，停止调度后续子查询");
            break;
        }

        let (node, error) = build_query_node(llm, source, plan, request, lang).await;
        let event = ResearchEvent::Papers {
            query: node.query,
            description: node.description,
            papers: node.papers,
            error,
        };
        if tx.send(event).await.is_err() {
            eprintln!("⚠️ 消费方已断开，停止推送");
            break;
        }
    }

    Ok(())
}
