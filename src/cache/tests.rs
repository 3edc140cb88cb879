#[cfg(test)]
mod tests {
    use crate::cache::CacheManager;
    use crate::config::CacheConfig;
    use tempfile::TempDir;

    fn cache_in(dir: &TempDir, enabled: bool) -> CacheManager {
        CacheManager::new(CacheConfig {
            enabled,
            cache_dir: dir.path().join("cache"),
            expire_hours: 1,
        })
    }

    #[test]
    fn test_hash_prompt_stable() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir, true);

        let h1 = cache.hash_prompt("hello");
        let h2 = cache.hash_prompt("hello");
        let h3 = cache.hash_prompt("world");
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert_eq!(h1.len(), 32);
    }

    #[tokio::test]
    async fn test_set_and_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir, true);

        cache
            .set("completions", "prompt-a", "response-a".to_string())
            .await
            .unwrap();

        let hit: Option<String> = cache.get("completions", "prompt-a").await;
        assert_eq!(hit, Some("response-a".to_string()));
    }

    #[tokio::test]
    async fn test_get_miss() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir, true);

        let miss: Option<String> = cache.get("completions", "never-stored").await;
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_disabled_cache_is_silent() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir, false);

        cache
            .set("completions", "prompt-a", "response-a".to_string())
            .await
            .unwrap();

        let hit: Option<String> = cache.get("completions", "prompt-a").await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped() {
        let dir = TempDir::new().unwrap();
        let cache = CacheManager::new(CacheConfig {
            enabled: true,
            cache_dir: dir.path().join("cache"),
            expire_hours: 0, // everything is immediately expired
        });

        cache
            .set("completions", "prompt-a", "response-a".to_string())
            .await
            .unwrap();

        // expire_hours = 0 means any nonzero age is stale; a fresh write within
        // the same second may still hit, so only assert no panic and type safety
        let _hit: Option<String> = cache.get("completions", "prompt-a").await;
    }

    #[tokio::test]
    async fn test_categories_are_isolated() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir, true);

        cache
            .set("completions", "prompt", "from-completions".to_string())
            .await
            .unwrap();

        let other: Option<String> = cache.get("plans", "prompt").await;
        assert!(other.is_none());
    }
}
