//! Fuzzy-match policy: when does a near-miss still count as correct?
//!
//! Tolerance is keyed on the target's length, not the guess's. A typo in a
//! long word is forgivable; a "typo" in a three-letter word is a different
//! word.

use crate::validation::distance::edit_distance;

/// Targets longer than this must also pass the proportional check
const LONG_WORD_LEN: usize = 8;

/// Maximum fraction of a long target that may be edited away
const MAX_EDIT_RATIO: f64 = 0.25;

/// Maximum tolerated edits for a target word of the given length.
///
/// - up to 3 letters: 0 (exact only)
/// - 4 to 5 letters: 1
/// - 6 to 8 letters: 1
/// - longer: 2, subject to the additional ratio check in [`is_fuzzy_match`]
pub fn max_tolerated_edits(target_len: usize) -> usize {
    match target_len {
        0..=3 => 0,
        4..=5 => 1,
        6..=8 => 1,
        _ => 2,
    }
}

/// Decide whether `guess` is close enough to `target` to count as correct.
///
/// Both inputs are expected case-folded already; this function compares them
/// as given. Equal strings always match. Otherwise the edit distance must
/// fit the tolerance for the target's length, and for targets longer than
/// eight letters no more than a quarter of the word may differ.
pub fn is_fuzzy_match(guess: &str, target: &str) -> bool {
    if guess == target {
        return true;
    }

    let target_len = target.chars().count();
    let tolerance = max_tolerated_edits(target_len);
    if tolerance == 0 {
        // Short words: no fuzzy acceptance possible.
        return false;
    }

    let distance = edit_distance(guess, target);
    if distance > tolerance {
        return false;
    }

    if target_len > LONG_WORD_LEN {
        let ratio = distance as f64 / target_len as f64;
        if ratio > MAX_EDIT_RATIO {
            return false;
        }
    }

    true
}
