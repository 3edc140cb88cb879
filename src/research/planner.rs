//! 研究计划生成 - 把自然语言问题分解为多条检索子查询

use crate::llm::TextGenerator;
use crate::research::parser::parse_query_plan;
use crate::types::SubqueryPlan;

/// 兜底子查询的固定说明文案
pub const FALLBACK_DESCRIPTION: &str = "Original query";

/// 构建查询分解的prompt。
/// 要求模型严格按编号的`Query: ... | Description: ...`格式输出英文查询，
/// 倾向宽泛的OR组合词以保证命中量，且不做时间限定
pub fn build_plan_prompt(natural_query: &str, max_queries: usize) -> String {
    format!(
        "You are a research assistant. Your task is to break down the following research topic into a list of specific search queries for academic paper databases.\n\n\
Please generate up to {max_queries} distinct search queries, each exploring a different facet or angle of the research topic. Each query should be designed to find relevant academic papers and should be accompanied by a brief description of its focus.\n\
IMPORTANT: Always generate search queries in English, even if the research topic is in another language. This is crucial for searching academic papers.\n\n\
---\n\
Additional Instructions:\n\
- Always include general and representative keywords related to the topic (e.g., 'machine learning', 'deep learning', 'LLM', etc.) in your queries, even if the topic is specific.\n\
- Combine multiple general terms using OR to broaden the search and ensure that each query will likely return more than 10 papers.\n\
- Prioritize query design that will result in a large number of hits, rather than being too specific.\n\
- Assume that the user will read the most recent papers first, so queries should not be limited by publication year.\n\
---\n\n\
Format your response EXACTLY as follows, including the numbering for queries:\n\
Search Queries:\n\
1. Query: [search terms 1 in English] | Description: [description for query 1]\n\
2. Query: [search terms 2 in English] | Description: [description for query 2]\n\
...\n\n\
For example:\n\n\
Research Topic: Explore the benefits and challenges of using TypeScript in large-scale front-end applications.\n\
Search Queries:\n\
1. Query: \"TypeScript large-scale applications benefits\" OR \"enterprise TypeScript advantages\" | Description: Focuses on the general benefits and advantages of using TypeScript in developing large front-end applications.\n\
2. Query: \"TypeScript challenges large projects\" OR \"TypeScript adoption hurdles enterprise\" | Description: Investigates the difficulties and obstacles encountered when implementing TypeScript in substantial or enterprise-level projects.\n\n\
Research Topic: The impact of renewable energy sources on grid stability.\n\
Search Queries:\n\
1. Query: \"renewable energy\" OR \"grid stability\" OR \"intermittent renewables\" | Description: Identifies challenges and issues related to integrating renewable energy sources into the power grid due to their intermittent nature.\n\
2. Query: \"grid stability solutions\" OR \"renewable energy\" OR \"mitigation techniques\" | Description: Explores solutions and techniques to maintain grid stability while incorporating a high penetration of renewable energy sources.\n\n\
Now, please provide the search queries for the following research topic:\n\
Research Topic: {natural_query}\n"
    )
}

/// 生成研究计划：(研究目标, 子查询列表)。
/// 研究目标即原始查询本身，不再让模型单独复述。
/// 本函数不会失败——模型调用异常或一条都解析不出来时，回退为原始查询单条计划
pub async fn generate_research_plan<G: TextGenerator>(
    llm: &G,
    natural_query: &str,
    max_queries: usize,
) -> (String, Vec<SubqueryPlan>) {
    let fallback = || {
        vec![SubqueryPlan {
            query: natural_query.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }]
    };

    let prompt = build_plan_prompt(natural_query, max_queries);
    let queries = match llm.generate_text(&prompt).await {
        Ok(response) => {
            let plans = parse_query_plan(&response, max_queries);
            if plans.is_empty() {
                eprintln!("⚠️ 未能从模型响应中解析出任何检索计划，回退为原始查询");
                fallback()
            } else {
                plans
            }
        }
        Err(e) => {
            eprintln!("❌ 生成研究计划失败: {}，回退为原始查询", e);
            fallback()
        }
    };

    (natural_query.to_string(), queries)
}

// Include tests
#[cfg(test)]
mod tests;
