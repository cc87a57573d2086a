/// Options controlling sanitization
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Delete characters that are neither word characters nor whitespace
    pub remove_special_chars: bool,

    /// Truncate the result to at most this many characters
    pub max_length: Option<usize>,
}

/// A character that may appear in a word: ASCII letter, digit, or underscore
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Sanitize a raw guess.
///
/// Trims surrounding whitespace, then applies the requested options in
/// order: special-character removal, length cap. A missing input yields
/// the empty string.
pub fn sanitize(raw: Option<&str>, options: &NormalizeOptions) -> String {
    let raw = match raw {
        Some(text) => text,
        None => return String::new(),
    };

    let mut text = raw.trim().to_string();

    if options.remove_special_chars {
        text.retain(|c| is_word_char(c) || c.is_whitespace());
    }

    if let Some(max) = options.max_length {
        if text.chars().count() > max {
            text = text.chars().take(max).collect();
        }
    }

    text
}
