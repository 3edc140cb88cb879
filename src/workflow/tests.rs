#[cfg(test)]
mod tests {
    use crate::config::{Config, LLMProvider};
    use crate::research::ResearchContext;
    use tempfile::TempDir;

    fn create_test_config() -> (Config, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        // Ollama后端无需API KEY，适合离线构造上下文
        config.llm.provider = LLMProvider::Ollama;
        config.llm.model = "llama3".to_string();
        config.output_path = temp_dir.path().join("output");
        config.cache.cache_dir = temp_dir.path().join("cache");
        (config, temp_dir)
    }

    #[test]
    fn test_research_context_creation() {
        let (config, _temp_dir) = create_test_config();

        let context = ResearchContext::new(config);
        assert!(context.is_ok());
    }

    #[test]
    fn test_research_context_config_values() {
        let (config, temp_dir) = create_test_config();

        let context = ResearchContext::new(config).unwrap();
        assert_eq!(context.config.llm.provider, LLMProvider::Ollama);
        assert_eq!(context.config.output_path, temp_dir.path().join("output"));
        assert_eq!(context.config.default_max_queries, 5);
        assert_eq!(context.config.default_max_results_per_query, 5);
    }

    #[test]
    fn test_research_context_with_cache_disabled() {
        let (mut config, _temp_dir) = create_test_config();
        config.cache.enabled = false;

        let context = ResearchContext::new(config);
        assert!(context.is_ok());
        assert!(!context.unwrap().config.cache.enabled);
    }

    #[test]
    fn test_research_context_stream_flag() {
        let (mut config, _temp_dir) = create_test_config();
        config.stream = true;

        let context = ResearchContext::new(config).unwrap();
        assert!(context.config.stream);
    }
}
