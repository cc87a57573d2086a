//! Edit distance with adjacent transpositions.
//!
//! The metric counts single-character insertions, deletions, substitutions,
//! and swaps of two neighboring characters, each as one edit. The swap rule
//! is what makes `distance("abcd", "acbd") == 1` instead of 2: plain
//! Levenshtein would bill that typo as two substitutions, which is too harsh
//! on the most common kind of slip.

/// Compute the edit distance between two strings.
///
/// Dynamic programming over an `(m+1) x (n+1)` table where `matrix[i][j]`
/// holds the distance between the first `i` chars of `a` and the first `j`
/// chars of `b`. Symmetric, and zero only for identical strings. Comparison
/// is exact on the chars as given; callers fold case beforehand when they
/// want case-insensitive behavior.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut matrix: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];

    for i in 0..=m {
        matrix[i][0] = i;
    }
    for j in 0..=n {
        matrix[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution

            // Adjacent transposition, one edit
            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                matrix[i][j] = matrix[i][j].min(matrix[i - 2][j - 2] + 1);
            }
        }
    }

    matrix[m][n]
}
