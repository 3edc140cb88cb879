//! 相关性评分 - 逐篇论文对照原始研究问题打分

use crate::i18n::TargetLanguage;
use crate::llm::TextGenerator;
use crate::research::parser::parse_relevance;

/// 摘要在prompt中的最大长度（按字符数截断）
const ABSTRACT_PROMPT_LIMIT: usize = 500;

/// 构建评分prompt，要求模型严格按`Score: ... | Explanation: ...`格式作答。
/// 评分对照的是原始研究问题，而不是命中该论文的子查询
pub fn build_score_prompt(
    title: &str,
    authors: &[String],
    abstract_text: &str,
    original_query: &str,
) -> String {
    let truncated: String = abstract_text.chars().take(ABSTRACT_PROMPT_LIMIT).collect();
    format!(
        "Rate the relevance of this research paper to the original research question on a scale of 0.0 to 1.0 \
(0.0 = not relevant, 1.0 = highly relevant). Provide a brief explanation for your rating.\n\n\
Paper Title: {title}\n\
Authors: {}\n\
Abstract (first 500 chars): {truncated}...\n\n\
Original Research Question: {original_query}\n\n\
Format your response EXACTLY as follows: Score: [score as a float between 0.0 and 1.0] | Explanation: [your brief reason here]",
        authors.join(", "),
    )
}

/// 为一篇论文计算相关性分数与说明。
/// 本函数不会失败——模型调用异常时返回0.0分与本地化的错误提示语，
/// 解析层面的失败已在parse_relevance内部收敛
pub async fn score_paper<G: TextGenerator>(
    llm: &G,
    title: &str,
    authors: &[String],
    abstract_text: &str,
    original_query: &str,
    lang: &TargetLanguage,
) -> (f64, String) {
    let prompt = build_score_prompt(title, authors, abstract_text, original_query);

    match llm.generate_text(&prompt).await {
        Ok(response) => parse_relevance(&response),
        Err(e) => {
            eprintln!("❌ 计算论文相关性分数失败: {}", e);
            (0.0, lang.score_failure_sentinel().to_string())
        }
    }
}
