//! 研究树组装 - 驱动"子查询检索 → 逐篇评分 → 节点聚合"的主流程。
//! 子查询严格串行处理：一条完整结束（检索+全部评分）后才开始下一条，
//! 节点顺序因此等于派发顺序，也避免对外部接口造成突发压力

use anyhow::Result;
use std::collections::HashSet;

use crate::arxiv::PaperSource;
use crate::i18n::TargetLanguage;
use crate::llm::TextGenerator;
use crate::research::planner::generate_research_plan;
use crate::research::scorer::score_paper;
use crate::types::{QueryNode, ResearchRequest, ResearchTree, ScoredPaper, SubqueryPlan};

/// 执行单条子查询：检索并逐篇评分，产出一个节点。
/// 检索失败被隔离在本节点内——返回空节点和错误描述，请求继续；
/// 评分失败在评分器内部已降级，不会丢弃论文，更不会中断节点
pub async fn build_query_node<G, S>(
    llm: &G,
    source: &S,
    plan: &SubqueryPlan,
    request: &ResearchRequest,
    lang: &TargetLanguage,
) -> (QueryNode, Option<String>)
where
    G: TextGenerator,
    S: PaperSource,
{
    eprintln!("🔍 正在检索: {}", plan.query);

    let papers = match source.search(&plan.query, request.max_results_per_query).await {
        Ok(papers) => papers,
        Err(e) => {
            eprintln!("❌ 子查询 \"{}\" 检索失败: {}", plan.query, e);
            let node = QueryNode::empty(plan.query.clone(), plan.description.clone());
            return (node, Some(e.to_string()));
        }
    };

    let mut scored_papers = Vec::with_capacity(papers.len());
    for paper in papers {
        // 评分对照原始研究问题，而非当前子查询
        let (relevance_score, relevance_explanation) = score_paper(
            llm,
            &paper.title,
            &paper.authors,
            &paper.summary,
            &request.natural_language_query,
            lang,
        )
        .await;

        scored_papers.push(ScoredPaper {
            paper,
            relevance_score,
            relevance_explanation,
        });
    }

    // 按分数降序的稳定排序，同分保持检索服务的返回顺序
    scored_papers.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let node = QueryNode::new(plan.query.clone(), plan.description.clone(), scored_papers);
    eprintln!("✓ 子查询完成，共{}篇论文", node.paper_count);
    (node, None)
}

/// 统计所有节点中按arxiv_id去重后的论文数
pub fn count_unique_papers(query_nodes: &[QueryNode]) -> usize {
    let mut seen_ids = HashSet::new();
    for node in query_nodes {
        for paper in &node.papers {
            seen_ids.insert(paper.paper.arxiv_id.as_str());
        }
    }
    seen_ids.len()
}

/// 组装完整的研究树（聚合模式）。
/// 计划生成与单节点失败都在内部收敛，此处返回Err仅代表不可恢复的内部错误，
/// 整个请求随之失败
pub async fn assemble_tree<G, S>(
    llm: &G,
    source: &S,
    request: &ResearchRequest,
    lang: &TargetLanguage,
) -> Result<ResearchTree>
where
    G: TextGenerator,
    S: PaperSource,
{
    eprintln!(
        "🚀 开始生成研究计划: {}",
        request.natural_language_query
    );
    let (research_goal, query_plans) = generate_research_plan(
        llm,
        &request.natural_language_query,
        request.max_queries,
    )
    .await;
    eprintln!("✓ 研究计划生成完毕，共{}条子查询", query_plans.len());

    let mut query_nodes = Vec::with_capacity(query_plans.len());
    let mut total_papers = 0;

    for plan in &query_plans {
        let (node, _error) = build_query_node(llm, source, plan, request, lang).await;
        total_papers += node.paper_count;
        query_nodes.push(node);
    }

    let total_unique_papers = count_unique_papers(&query_nodes);

    Ok(ResearchTree {
        original_query: request.natural_language_query.clone(),
        research_goal,
        query_nodes,
        total_papers,
        total_unique_papers,
    })
}
