//! Guess validation pipeline.
//!
//! [`validate`] classifies one guess against one target word through a fixed
//! sequence of checks; the first check that applies determines the result.
//! Every branch returns a fully formed [`GuessResult`], so malformed input
//! is feedback for the player, never an error for the caller. The whole
//! pipeline is a pure function of its two inputs: no state, no I/O, safe to
//! call from any number of concurrent sessions.

pub mod distance;
pub mod fuzzy;
pub mod normalize;

pub use distance::edit_distance;
pub use fuzzy::{is_fuzzy_match, max_tolerated_edits};
pub use normalize::{sanitize, NormalizeOptions};

use crate::core::{GuessResult, HintLevel, TargetWord};
use normalize::is_word_char;

/// Longest raw guess the validator will look at, in chars
pub const MAX_GUESS_LENGTH: usize = 50;

/// Classify a guess against a target word.
///
/// Checks run strictly in order:
/// 1. absent guess or target
/// 2. empty after trimming
/// 3. raw input longer than [`MAX_GUESS_LENGTH`]
/// 4. digits only
/// 5. special characters
/// 6. exact match, case-insensitive
/// 7. accepted near-miss (fuzzy match)
/// 8. length mismatch, with the target's letter count as a mild hint
/// 9. rejection revealing first and last letter as a strong hint
///
/// The fuzzy check runs before the length comparison so that a one-letter
/// dropped or doubled typo in a longer word is still accepted; only guesses
/// beyond typo range get the length feedback.
pub fn validate(raw_guess: Option<&str>, target: Option<&TargetWord>) -> GuessResult {
    let (raw, target) = match (raw_guess, target) {
        (Some(raw), Some(target)) => (raw, target),
        _ => return GuessResult::incorrect("Please enter a valid guess.", HintLevel::None),
    };

    let guess = sanitize(Some(raw), &NormalizeOptions::default());
    if guess.is_empty() {
        return GuessResult::incorrect("Please enter a word.", HintLevel::None);
    }

    // The length gate looks at the raw input, so a guess padded past the
    // cap with whitespace is rejected rather than quietly trimmed in.
    if raw.chars().count() > MAX_GUESS_LENGTH {
        return GuessResult::incorrect(
            format!(
                "That guess is too long. Guesses are capped at {} characters.",
                MAX_GUESS_LENGTH
            ),
            HintLevel::None,
        );
    }

    if guess.chars().all(|c| c.is_ascii_digit()) {
        return GuessResult::incorrect(
            "Words are made of letters, not just numbers. Try again!",
            HintLevel::None,
        );
    }

    if guess.chars().any(|c| !is_word_char(c) && !c.is_whitespace()) {
        return GuessResult::incorrect(
            "Please avoid special characters in your guess.",
            HintLevel::None,
        );
    }

    let folded_guess = guess.to_lowercase();
    let folded_target = target.word.to_lowercase();

    if folded_guess == folded_target {
        return GuessResult::correct("Correct! Well done!");
    }

    if is_fuzzy_match(&folded_guess, &folded_target) {
        tracing::debug!(
            "Accepting near-miss guess '{}' for '{}'",
            folded_guess,
            folded_target
        );
        return GuessResult::correct(format!(
            "Almost! The word is \"{}\". Close enough, it counts!",
            target.word
        ));
    }

    let guess_len = folded_guess.chars().count();
    let target_len = folded_target.chars().count();
    if guess_len != target_len {
        let direction = if guess_len < target_len {
            "short"
        } else {
            "long"
        };
        return GuessResult::incorrect(
            format!(
                "Your guess is too {}. You're looking for a {}-letter word.",
                direction, target_len
            ),
            HintLevel::Mild,
        );
    }

    GuessResult::incorrect(
        format!(
            "Not quite! Hint: the word starts with '{}' and ends with '{}'.",
            target.first_letter(),
            target.last_letter()
        ),
        HintLevel::Strong,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn example() -> TargetWord {
        TargetWord::new(
            1,
            "example",
            "a thing characteristic of its kind",
            Difficulty::Medium,
        )
    }

    #[test]
    fn test_absent_inputs() {
        let result = validate(None, Some(&example()));
        assert!(!result.is_correct);
        assert_eq!(result.message, "Please enter a valid guess.");
        assert_eq!(result.hint_level, HintLevel::None);

        let result = validate(Some("example"), None);
        assert!(!result.is_correct);
        assert_eq!(result.message, "Please enter a valid guess.");

        let result = validate(None, None);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_empty_after_trim() {
        let target = example();
        for guess in ["", "   ", "\t\n"] {
            let result = validate(Some(guess), Some(&target));
            assert!(!result.is_correct);
            assert_eq!(result.message, "Please enter a word.");
            assert_eq!(result.hint_level, HintLevel::None);
        }
    }

    #[test]
    fn test_overlong_raw_guess() {
        let target = example();
        let long = "a".repeat(MAX_GUESS_LENGTH + 1);
        let result = validate(Some(&long), Some(&target));
        assert!(!result.is_correct);
        assert!(result.message.contains("too long"));
        assert_eq!(result.hint_level, HintLevel::None);
    }

    #[test]
    fn test_length_gate_counts_raw_chars() {
        let target = example();
        // 48 chars of padding around a valid word pushes the raw length
        // over the cap even though the trimmed guess would be fine.
        let padded = format!("{}example{}", " ".repeat(24), " ".repeat(24));
        assert!(padded.chars().count() > MAX_GUESS_LENGTH);
        let result = validate(Some(&padded), Some(&target));
        assert!(!result.is_correct);
        assert!(result.message.contains("too long"));
    }

    #[test]
    fn test_digits_only_rejected() {
        let target = example();
        let result = validate(Some("12345"), Some(&target));
        assert!(!result.is_correct);
        assert!(result.message.contains("not just numbers"));
        assert_eq!(result.hint_level, HintLevel::None);
    }

    #[test]
    fn test_special_characters_rejected() {
        let target = example();
        for guess in ["ex@mple!", "wo#rd", "hello?", "naïve"] {
            let result = validate(Some(guess), Some(&target));
            assert!(!result.is_correct, "{guess}");
            assert!(result.message.contains("special characters"), "{guess}");
            assert_eq!(result.hint_level, HintLevel::None);
        }
    }

    #[test]
    fn test_exact_match() {
        let target = example();
        let result = validate(Some("example"), Some(&target));
        assert!(result.is_correct);
        assert_eq!(result.message, "Correct! Well done!");
        assert_eq!(result.hint_level, HintLevel::None);
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let target = example();
        for guess in [" example ", "EXAMPLE", "ExAmPlE", "\texample\n"] {
            let result = validate(Some(guess), Some(&target));
            assert!(result.is_correct, "{guess:?}");
            assert_eq!(result.hint_level, HintLevel::None);
        }
    }

    #[test]
    fn test_near_miss_accepted_with_almost_message() {
        let target = example();
        let result = validate(Some("exampl"), Some(&target));
        assert!(result.is_correct);
        assert!(result.message.contains("Almost"));
        assert!(result.message.contains("example"));
        assert_eq!(result.hint_level, HintLevel::None);
    }

    #[test]
    fn test_same_length_typo_accepted() {
        let target = example();
        // Adjacent transposition, one edit.
        let result = validate(Some("exampel"), Some(&target));
        assert!(result.is_correct);
        assert!(result.message.contains("Almost"));
    }

    #[test]
    fn test_length_mismatch_gives_mild_hint() {
        let target = example();
        let result = validate(Some("exam"), Some(&target));
        assert!(!result.is_correct);
        assert!(result.message.contains("too short"));
        assert!(result.message.contains("7-letter"));
        assert_eq!(result.hint_level, HintLevel::Mild);

        let result = validate(Some("exampleexample"), Some(&target));
        assert!(!result.is_correct);
        assert!(result.message.contains("too long"));
        assert!(result.message.contains("7-letter"));
        assert_eq!(result.hint_level, HintLevel::Mild);
    }

    #[test]
    fn test_same_length_miss_reveals_first_and_last_letter() {
        let target = example();
        let result = validate(Some("another"), Some(&target));
        assert!(!result.is_correct);
        assert!(result.message.contains('e'));
        assert!(result.message.contains("starts with 'e'"));
        assert!(result.message.contains("ends with 'e'"));
        assert_eq!(result.hint_level, HintLevel::Strong);
    }

    #[test]
    fn test_short_target_never_fuzzy_matches() {
        let target = TargetWord::new(2, "cat", "a small domesticated feline", Difficulty::Easy);
        let result = validate(Some("bat"), Some(&target));
        assert!(!result.is_correct);
        assert_eq!(result.hint_level, HintLevel::Strong);

        let result = validate(Some("ca"), Some(&target));
        assert!(!result.is_correct);
        assert_eq!(result.hint_level, HintLevel::Mild);
    }

    #[test]
    fn test_every_branch_returns_a_result() {
        // A grab bag of hostile input; nothing may panic and every call
        // must produce a message.
        let target = example();
        let inputs = [
            None,
            Some(""),
            Some("     "),
            Some("9999999"),
            Some("!!!"),
            Some("exa mple"),
            Some("ｅｘａｍｐｌｅ"),
            Some("\u{0}"),
        ];
        for raw in inputs {
            let result = validate(raw, Some(&target));
            assert!(!result.message.is_empty(), "{raw:?}");
        }
    }
}
