//! 模型响应解析 - 纯文本到结构化数据的无副作用函数。
//! 模型的输出没有任何格式保证，解析失败一律以兜底值收敛，绝不向上抛错

use regex::Regex;
use std::sync::LazyLock;

use crate::types::SubqueryPlan;

/// 仅解析到分数、说明缺失时的提示语
pub const EXPLANATION_FORMAT_MISMATCH: &str = "Explanation not parsed due to format mismatch.";

/// 从自由文本中捞出裸数字作为分数时的提示语
pub const EXPLANATION_BARE_NUMBER: &str = "Score recovered from free-form response.";

/// 依据定性措辞推断分数时的提示语
pub const EXPLANATION_KEYWORD: &str = "Score inferred from qualitative wording.";

/// 完全无法解析时的兜底提示语
pub const EXPLANATION_UNPARSED: &str = "Could not parse score or explanation.";

/// 定性措辞到分数的映射。
/// 按列表顺序扫描、首个命中生效，改变顺序会改变可观测的评分行为
const RELEVANCE_KEYWORDS: [(&str, f64); 5] = [
    ("highly relevant", 0.9),
    ("relevant", 0.7),
    ("somewhat relevant", 0.5),
    ("not very relevant", 0.3),
    ("not relevant", 0.0),
];

// `N. Query: ... | Description: ...`形式的行，Query/Description字面量区分大小写
static PLAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\d+\.\s*Query:\s*(.+?)\s*\|\s*Description:\s*(.+?)$").unwrap()
});

static STRICT_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Score:\s*(\d+\.?\d*)\s*\|\s*Explanation:\s*(.+)").unwrap());

static LENIENT_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Score:\s*(\d+\.?\d*)").unwrap());

static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.?\d*").unwrap());

/// 从模型的自由文本响应中解析检索计划。
/// 返回出现顺序的(查询, 说明)列表并截断到max_queries；
/// 解析不到任何条目时返回空列表，由调用方回退为原始查询
pub fn parse_query_plan(response: &str, max_queries: usize) -> Vec<SubqueryPlan> {
    // 统一换行符后再逐行匹配
    let processed = response.replace("\r\n", "\n").replace('\r', "\n");
    let processed = processed.trim();

    let mut plans = Vec::new();
    for caps in PLAN_RE.captures_iter(processed) {
        let query = caps[1].trim().to_string();
        let description = caps[2].trim().to_string();
        plans.push(SubqueryPlan { query, description });
    }

    plans.truncate(max_queries);
    plans
}

/// 从模型的自由文本响应中解析相关性分数与说明。
/// 兜底链按优先级依次尝试：严格格式 > 仅分数 > 裸数字 > 定性措辞 > 固定兜底值。
/// 该优先级是可观测行为的一部分，不可调整
pub fn parse_relevance(response: &str) -> (f64, String) {
    // 1. 严格格式 `Score: X | Explanation: Y`
    if let Some(caps) = STRICT_SCORE_RE.captures(response) {
        if let Ok(raw) = caps[1].parse::<f64>() {
            let explanation = caps[2].trim().to_string();
            return (normalize_score(raw), explanation);
        }
    }

    // 2. 退而求其次，只认`Score: X`
    if let Some(caps) = LENIENT_SCORE_RE.captures(response) {
        if let Ok(raw) = caps[1].parse::<f64>() {
            return (normalize_score(raw), EXPLANATION_FORMAT_MISMATCH.to_string());
        }
    }

    // 3. 文本中出现的第一个裸数字
    if let Some(m) = BARE_NUMBER_RE.find(response) {
        if let Ok(raw) = m.as_str().parse::<f64>() {
            return (normalize_score(raw), EXPLANATION_BARE_NUMBER.to_string());
        }
    }

    // 4. 定性措辞映射，忽略大小写，首个命中生效
    let lowered = response.to_lowercase();
    for (keyword, score) in RELEVANCE_KEYWORDS {
        if lowered.contains(keyword) {
            return (score, EXPLANATION_KEYWORD.to_string());
        }
    }

    // 5. 彻底放弃
    (0.0, EXPLANATION_UNPARSED.to_string())
}

/// 分数归一化：(1.0, 10.0]区间按0-10制换算到0-1制，随后无条件夹取到[0.0, 1.0]
fn normalize_score(raw: f64) -> f64 {
    let score = if raw > 1.0 && raw <= 10.0 {
        raw / 10.0
    } else {
        raw
    };
    score.clamp(0.0, 1.0)
}
