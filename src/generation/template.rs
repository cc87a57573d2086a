use crate::error::Result;
use crate::generation::{GenerationRequest, TextGenerator};

/// Template-based generator (fallback when the remote service is unavailable).
///
/// Builds text from the request fields alone, so it never fails and needs no
/// network. Hint text describes the shape of the word without spelling it out.
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    fn hint_text(word: &str, definition: &str) -> String {
        let letters = word.chars().count();
        let first = word.chars().next().unwrap_or('?');
        let vowels = word.chars().filter(|c| "aeiou".contains(*c)).count();

        // Dataset definitions never contain their own word; mask anyway in
        // case a caller-supplied one does.
        let safe_definition = definition.to_lowercase().replace(word, "____");

        format!(
            "It has {} letters, starts with '{}' and contains {} vowel{}. Think of: {}.",
            letters,
            first,
            vowels,
            if vowels == 1 { "" } else { "s" },
            safe_definition
        )
    }

    fn description_text(word: &str) -> String {
        let letters = word.chars().count();
        format!(
            "I'm thinking of a {}-letter word. Can you figure it out?",
            letters
        )
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextGenerator for TemplateGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let text = match request {
            GenerationRequest::Hint { word, definition } => Self::hint_text(word, definition),
            GenerationRequest::Description { word } => Self::description_text(word),
        };

        Ok(text)
    }

    fn name(&self) -> &str {
        "template"
    }

    async fn is_available(&self) -> bool {
        true
    }
}
