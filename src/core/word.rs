use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier of a target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Base points awarded for solving a word of this difficulty
    pub fn base_points(self) -> i64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// A word the player must guess, prompted by its definition.
///
/// Owned by the word dataset and read-only everywhere else; the guess
/// validator never mutates or stores one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetWord {
    /// Unique id within the dataset
    pub id: u32,

    /// The hidden word, stored lowercase
    pub word: String,

    /// Definition shown to the player as the prompt
    pub definition: String,

    /// Difficulty tag
    pub difficulty: Difficulty,
}

impl TargetWord {
    /// Create a new TargetWord. The word text is lowercased so that
    /// comparisons elsewhere only have to fold the guess.
    pub fn new(
        id: u32,
        word: impl Into<String>,
        definition: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            word: word.into().to_lowercase(),
            definition: definition.into(),
            difficulty,
        }
    }

    /// Number of letters, counted in chars
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }

    /// First letter of the word ('?' for an empty word, which the dataset
    /// never produces)
    pub fn first_letter(&self) -> char {
        self.word.chars().next().unwrap_or('?')
    }

    /// Last letter of the word
    pub fn last_letter(&self) -> char {
        self.word.chars().last().unwrap_or('?')
    }

    /// Case-insensitive equality against a guess
    pub fn matches(&self, guess: &str) -> bool {
        self.word == guess.to_lowercase()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.difficulty)
    }
}
