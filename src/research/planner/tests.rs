#[cfg(test)]
mod tests {
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    use crate::llm::TextGenerator;
    use crate::research::planner::{
        FALLBACK_DESCRIPTION, build_plan_prompt, generate_research_plan,
    };

    struct FixedGenerator {
        response: &'static str,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            Ok(self.response.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_plan_prompt_embeds_query_and_limit() {
        let prompt = build_plan_prompt("AI in education", 3);
        assert!(prompt.contains("Research Topic: AI in education"));
        assert!(prompt.contains("up to 3 distinct search queries"));
        assert!(prompt.contains("Format your response EXACTLY"));
        // 查询必须是英文，prompt中要有明确指令
        assert!(prompt.contains("Always generate search queries in English"));
    }

    #[tokio::test]
    async fn test_generate_plan_parses_model_output() {
        let llm = FixedGenerator {
            response: "Search Queries:\n\
1. Query: \"AI education\" OR \"intelligent tutoring\" | Description: Broad overview of AI in classrooms.\n\
2. Query: \"adaptive learning\" OR \"personalized education AI\" | Description: Focus on adaptive systems.",
        };

        let (goal, plans) = generate_research_plan(&llm, "AI in education", 5).await;
        assert_eq!(goal, "AI in education");
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].query, "\"AI education\" OR \"intelligent tutoring\"");
        assert_eq!(plans[1].description, "Focus on adaptive systems.");
    }

    #[tokio::test]
    async fn test_generate_plan_truncates_to_max_queries() {
        let llm = FixedGenerator {
            response: "1. Query: q1 | Description: d1\n\
2. Query: q2 | Description: d2\n\
3. Query: q3 | Description: d3",
        };

        let (_, plans) = generate_research_plan(&llm, "topic", 2).await;
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].query, "q2");
    }

    #[tokio::test]
    async fn test_generate_plan_falls_back_on_unparsable_output() {
        let llm = FixedGenerator {
            response: "I'm sorry, I can't produce queries right now.",
        };

        let (goal, plans) = generate_research_plan(&llm, "AI in education", 5).await;
        assert_eq!(goal, "AI in education");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].query, "AI in education");
        assert_eq!(plans[0].description, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_generate_plan_never_fails_on_llm_error() {
        let (goal, plans) = generate_research_plan(&FailingGenerator, "AI in education", 5).await;
        assert_eq!(goal, "AI in education");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].query, "AI in education");
        assert_eq!(plans[0].description, "Original query");
    }
}
