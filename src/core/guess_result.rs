use serde::{Deserialize, Serialize};

/// How much structural information about the target word a validation
/// message reveals.
///
/// The ordering is meaningful: `None < Mild < Strong`. A `Mild` message
/// states the target's letter count; a `Strong` message reveals actual
/// letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintLevel {
    None,
    Mild,
    Strong,
}

/// Outcome of classifying one guess against one target word.
///
/// Every guess produces exactly one of these; there is no error path.
/// A correct result (exact or accepted fuzzy match) always carries
/// `HintLevel::None`; the constructors keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    /// Whether the guess counts as the answer
    pub is_correct: bool,

    /// Player-facing feedback message
    pub message: String,

    /// How much the message gives away about the target
    pub hint_level: HintLevel,
}

impl GuessResult {
    /// A correct answer. Forces `HintLevel::None`: there is nothing left
    /// to hint at once the word is found.
    pub fn correct(message: impl Into<String>) -> Self {
        Self {
            is_correct: true,
            message: message.into(),
            hint_level: HintLevel::None,
        }
    }

    /// A rejected guess with the given hint escalation tier
    pub fn incorrect(message: impl Into<String>, hint_level: HintLevel) -> Self {
        Self {
            is_correct: false,
            message: message.into(),
            hint_level,
        }
    }

    /// True when the message leaked structural information (length or
    /// letters) about the target
    pub fn reveals_structure(&self) -> bool {
        self.hint_level > HintLevel::None
    }
}
