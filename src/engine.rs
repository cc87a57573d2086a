use crate::cache::{CacheStats, TextCache, TextCacheConfig};
use crate::core::{Difficulty, GuessResult, TargetWord};
use crate::error::{Result, WordGameError};
use crate::generation::{GenerationRequest, RemoteGenerator, TemplateGenerator, TextGenerator};
use crate::session::RoundSummary;
use crate::storage::{RoundRecord, RoundStore, StoreStats};
use crate::validation;
use crate::words::WordStore;
use std::sync::Arc;

/// Main word game orchestrator
pub struct GameEngine {
    words: WordStore,
    generator: Arc<dyn TextGenerator>,
    cache: Arc<TextCache>,
    store: Option<RoundStore>,
    // Last resort when the active generator errors mid-round
    fallback: TemplateGenerator,
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of a remote generation service, if one should be tried.
    pub generator_url: Option<String>,
    /// Round history database path; `None` plays without persistence.
    pub db_path: Option<String>,
    pub cache: TextCacheConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            generator_url: None,
            db_path: None,
            cache: TextCacheConfig::default(),
        }
    }
}

impl GameEngine {
    /// Create a new engine from `config`.
    pub async fn new(config: EngineConfig) -> Result<Self> {
        // Try the remote generator first, fallback to templates
        let generator: Arc<dyn TextGenerator> = match &config.generator_url {
            Some(url) => match RemoteGenerator::new(url.as_str()).await {
                Ok(remote) => {
                    tracing::info!("✅ Remote generator connected at {}", url);
                    Arc::new(remote)
                }
                Err(e) => {
                    tracing::warn!("⚠️ Remote generator unavailable, using templates: {}", e);
                    Arc::new(TemplateGenerator::new())
                }
            },
            None => Arc::new(TemplateGenerator::new()),
        };

        let store = match &config.db_path {
            Some(path) => Some(RoundStore::new(path).await?),
            None => None,
        };

        Ok(Self {
            words: WordStore::new(),
            generator,
            cache: Arc::new(TextCache::with_config(config.cache)),
            store,
            fallback: TemplateGenerator::new(),
        })
    }

    /// Assemble an engine from pre-built parts.
    pub fn with_parts(
        words: WordStore,
        generator: Arc<dyn TextGenerator>,
        cache: Arc<TextCache>,
        store: Option<RoundStore>,
    ) -> Self {
        Self {
            words,
            generator,
            cache,
            store,
            fallback: TemplateGenerator::new(),
        }
    }

    /// Draw the target word for a new round.
    pub fn new_round(&self, difficulty: Option<Difficulty>) -> Result<TargetWord> {
        let word = self.words.pick(difficulty)?;
        tracing::debug!("New round: {} ({})", word.word, word.difficulty);
        Ok(word)
    }

    /// Validate one guess against `target`.
    ///
    /// Pure and total: any input, present or not, maps to a `GuessResult`.
    pub fn check_guess(&self, raw_guess: Option<&str>, target: &TargetWord) -> GuessResult {
        validation::validate(raw_guess, Some(target))
    }

    /// A hint for `target`, cached across requests.
    pub async fn hint(&self, target: &TargetWord) -> Result<String> {
        self.generate_cached(GenerationRequest::hint(target)).await
    }

    /// A round-intro description of `target`, cached across requests.
    pub async fn description(&self, target: &TargetWord) -> Result<String> {
        self.generate_cached(GenerationRequest::description(target))
            .await
    }

    async fn generate_cached(&self, request: GenerationRequest) -> Result<String> {
        let key = request.cache_key();

        if let Some(text) = self.cache.get(&key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(text);
        }

        let text = match self.generator.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "Generator {} failed, using template: {}",
                    self.generator.name(),
                    e
                );
                self.fallback.generate(&request).await?
            }
        };

        self.cache.add(&key, &text, None);
        Ok(text)
    }

    /// Persist a finished round, when a store is configured.
    pub async fn record_round(&self, summary: &RoundSummary) -> Result<()> {
        if let Some(store) = &self.store {
            store.record(&RoundRecord::from_summary(summary)).await?;
        }
        Ok(())
    }

    /// Look up a word by id, for callers that address words over the wire.
    pub fn word(&self, id: u32) -> Result<&TargetWord> {
        self.words.get(id).ok_or(WordGameError::UnknownWord(id))
    }

    pub fn words(&self) -> &WordStore {
        &self.words
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Get text cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Aggregate round history, `None` without a store.
    pub async fn history_stats(&self) -> Result<Option<StoreStats>> {
        match &self.store {
            Some(store) => Ok(Some(store.stats().await?)),
            None => Ok(None),
        }
    }

    /// The latest finished rounds, empty without a store.
    pub async fn recent_rounds(&self, limit: usize) -> Result<Vec<RoundRecord>> {
        match &self.store {
            Some(store) => store.recent(limit).await,
            None => Ok(Vec::new()),
        }
    }
}
