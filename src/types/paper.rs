use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 检索服务返回的候选论文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// 论文的稳定标识，跨子查询去重的键
    pub arxiv_id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub summary: String,
    #[serde(rename = "published_date")]
    pub published: DateTime<Utc>,
    pub url: String,
    pub categories: Vec<String>,
}

/// 附带相关性评分的论文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPaper {
    #[serde(flatten)]
    pub paper: Paper,
    /// 与原始研究问题（而非子查询）的相关性，取值范围[0.0, 1.0]
    pub relevance_score: f64,
    pub relevance_explanation: String,
}
