use serde::{Deserialize, Serialize};

use crate::types::paper::ScoredPaper;

fn default_max_results_per_query() -> usize {
    5
}

fn default_max_queries() -> usize {
    5
}

/// 一次研究请求，构造后不再变更
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub natural_language_query: String,
    #[serde(default = "default_max_results_per_query")]
    pub max_results_per_query: usize,
    #[serde(default = "default_max_queries")]
    pub max_queries: usize,
}

impl ResearchRequest {
    pub fn new(natural_language_query: impl Into<String>) -> Self {
        Self {
            natural_language_query: natural_language_query.into(),
            max_results_per_query: default_max_results_per_query(),
            max_queries: default_max_queries(),
        }
    }
}

/// 规划阶段产出的一条子查询，顺序与模型输出一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubqueryPlan {
    pub query: String,
    /// 该子查询聚焦什么方向的说明
    pub description: String,
}

/// 单个子查询及其检索结果构成的节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryNode {
    pub query: String,
    pub description: String,
    /// 按relevance_score降序排列，同分保持检索服务的返回顺序
    pub papers: Vec<ScoredPaper>,
    pub paper_count: usize,
}

impl QueryNode {
    /// 构造节点并同步paper_count
    pub fn new(query: String, description: String, papers: Vec<ScoredPaper>) -> Self {
        let paper_count = papers.len();
        Self {
            query,
            description,
            papers,
            paper_count,
        }
    }

    /// 检索失败时的空节点，请求的其余部分继续执行
    pub fn empty(query: String, description: String) -> Self {
        Self::new(query, description, Vec::new())
    }
}

/// 树状的完整研究结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchTree {
    pub original_query: String,
    pub research_goal: String,
    /// 节点顺序等于子查询的派发顺序
    pub query_nodes: Vec<QueryNode>,
    pub total_papers: usize,
    /// 按arxiv_id去重后的论文数，恒有 total_unique_papers <= total_papers
    pub total_unique_papers: usize,
}
