//! Tokenizer: splits free-form form input into lowercase match tokens.

use crate::roadmap::models::FreeText;

/// Splits on comma and newline, trims, lowercases, and drops empty tokens.
pub fn tokenize_text(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokenizes every item of a list; an item may itself hold several delimited tokens.
pub fn tokenize_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| tokenize_text(item.as_ref()))
        .collect()
}

impl FreeText {
    pub fn tokens(&self) -> Vec<String> {
        match self {
            FreeText::Text(text) => tokenize_text(text),
            FreeText::List(items) => tokenize_list(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_comma_and_newline() {
        let tokens = tokenize_text("Sourcing candidates, Interview scheduling\nOnboarding");
        assert_eq!(
            tokens,
            vec!["sourcing candidates", "interview scheduling", "onboarding"]
        );
    }

    #[test]
    fn test_drops_empty_tokens() {
        assert_eq!(tokenize_text(" , ,\n\n  a ,"), vec!["a"]);
        assert!(tokenize_text("").is_empty());
    }

    #[test]
    fn test_list_items_are_split_too() {
        let tokens = tokenize_list(&["Recruitment", "HR Operations, Payroll", "  "]);
        assert_eq!(tokens, vec!["recruitment", "hr operations", "payroll"]);
    }

    #[test]
    fn test_empty_list_yields_no_tokens() {
        let empty: [&str; 0] = [];
        assert!(tokenize_list(&empty).is_empty());
    }

    #[test]
    fn test_free_text_variants_agree() {
        let text = FreeText::from("Audits, Compliance");
        let list = FreeText::List(vec!["Audits".to_string(), "Compliance".to_string()]);
        assert_eq!(text.tokens(), list.tokens());
    }
}
