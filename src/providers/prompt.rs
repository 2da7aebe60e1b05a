/// The system prompt used for extracting per-serving ingredient lists from a
/// dish name or recipe text.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const INGREDIENT_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!INGREDIENT_EXTRACTION_PROMPT.is_empty());

        // Verify it pins down the response contract
        assert!(INGREDIENT_EXTRACTION_PROMPT.contains("\"title\""));
        assert!(INGREDIENT_EXTRACTION_PROMPT.contains("\"ingredients\""));
        assert!(INGREDIENT_EXTRACTION_PROMPT.contains("\"amount\""));
        assert!(INGREDIENT_EXTRACTION_PROMPT.contains("\"unit\""));
    }

    #[test]
    fn test_prompt_restricts_units() {
        assert!(INGREDIENT_EXTRACTION_PROMPT.contains("g, kg, ml, l"));
    }
}
