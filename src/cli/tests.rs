#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use crate::i18n::TargetLanguage;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(
            std::iter::once("scholartree-rs")
                .chain(args.iter().copied())
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_minimal_invocation_uses_defaults() {
        let args = parse(&["AI in education"]);
        let (config, request) = args.into_parts();

        assert_eq!(request.natural_language_query, "AI in education");
        assert_eq!(request.max_results_per_query, 5);
        assert_eq!(request.max_queries, 5);
        assert!(!config.stream);
        assert_eq!(config.output_path, PathBuf::from("./arbor.results"));
    }

    #[test]
    fn test_request_limit_overrides() {
        let args = parse(&[
            "AI in education",
            "--max-results-per-query",
            "2",
            "--max-queries",
            "3",
        ]);
        let (_, request) = args.into_parts();

        assert_eq!(request.max_results_per_query, 2);
        assert_eq!(request.max_queries, 3);
    }

    #[test]
    fn test_stream_flag() {
        let args = parse(&["AI in education", "--stream"]);
        let (config, _) = args.into_parts();
        assert!(config.stream);
    }

    #[test]
    fn test_llm_overrides() {
        let args = parse(&[
            "AI in education",
            "--llm-provider",
            "ollama",
            "--model",
            "llama3",
            "--llm-api-key",
            "secret",
            "--max-tokens",
            "4096",
            "--temperature",
            "0.7",
        ]);
        let (config, _) = args.into_parts();

        assert_eq!(config.llm.provider, LLMProvider::Ollama);
        assert_eq!(config.llm.model, "llama3");
        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.llm.temperature, 0.7);
    }

    #[test]
    fn test_unknown_provider_keeps_default() {
        let args = parse(&["AI in education", "--llm-provider", "nonsense"]);
        let (config, _) = args.into_parts();
        assert_eq!(config.llm.provider, LLMProvider::Gemini);
    }

    #[test]
    fn test_target_language_override() {
        let args = parse(&["AI in education", "--target-language", "ja"]);
        let (config, _) = args.into_parts();
        assert_eq!(config.target_language, TargetLanguage::Japanese);
    }

    #[test]
    fn test_no_cache_disables_cache() {
        let args = parse(&["AI in education", "--no-cache"]);
        let (config, _) = args.into_parts();
        assert!(!config.cache.enabled);
    }

    #[test]
    fn test_output_path_override() {
        let args = parse(&["AI in education", "--output-path", "/tmp/results"]);
        let (config, _) = args.into_parts();
        assert_eq!(config.output_path, PathBuf::from("/tmp/results"));
    }

    #[test]
    fn test_verbose_flag() {
        let args = parse(&["AI in education", "-v"]);
        let (config, _) = args.into_parts();
        assert!(config.verbose);
    }
}
