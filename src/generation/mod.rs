pub mod remote;
pub mod template;

pub use remote::RemoteGenerator;
pub use template::TemplateGenerator;

use crate::core::TargetWord;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything the game can ask a generator for.
///
/// This enum is the whole request surface: one variant per action, consumed
/// by exhaustive `match`, serialized with a `action` tag on the wire. There
/// is no free-form action string that could reach a backend unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GenerationRequest {
    /// A nudge toward the word that must not give it away.
    Hint { word: String, definition: String },
    /// A short teaser describing the word for round intros.
    Description { word: String },
}

impl GenerationRequest {
    pub fn hint(target: &TargetWord) -> Self {
        Self::Hint {
            word: target.word.clone(),
            definition: target.definition.clone(),
        }
    }

    pub fn description(target: &TargetWord) -> Self {
        Self::Description {
            word: target.word.clone(),
        }
    }

    /// The wire-level action tag, for logs.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Hint { .. } => "hint",
            Self::Description { .. } => "description",
        }
    }

    /// Stable cache key: same word and action, same key.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Hint { word, .. } => format!("hint:{word}"),
            Self::Description { word } => format!("description:{word}"),
        }
    }
}

/// Trait for text-generation backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce the text for `request`.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Generator name for logging
    fn name(&self) -> &str;

    /// Check if the backend is reachable
    async fn is_available(&self) -> bool;
}
