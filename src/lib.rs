//! # WordWhiz Engine
//!
//! Guess-validation engine for a word-guessing game, with:
//! - Tolerant guess matching (typo-aware, length-scaled)
//! - Embedded word dataset with difficulty tiers
//! - Hint/description generation with an offline fallback
//! - SQLite round history
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wordwhiz_engine::{EngineConfig, GameEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = GameEngine::new(EngineConfig::default()).await?;
//!
//!     let word = engine.new_round(None)?;
//!     println!("Definition: {}", word.definition);
//!
//!     let result = engine.check_guess(Some("my guess"), &word);
//!     println!("{}", result.message);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod core;
pub mod engine;
pub mod error;
pub mod generation;
pub mod session;
pub mod storage;
pub mod validation;
pub mod words;

// Re-export primary types
pub use cache::{CacheStats, TextCache, TextCacheConfig};
pub use core::{Difficulty, GuessResult, HintLevel, TargetWord};
pub use engine::{EngineConfig, GameEngine};
pub use error::{Result, WordGameError};
pub use generation::{GenerationRequest, TextGenerator};
pub use session::{GameSession, RoundSummary};
pub use storage::{RoundRecord, RoundStore, StoreStats};
pub use validation::validate;
pub use words::WordStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
