/// Normalise a user query: surrounding whitespace dropped, lowercased.
pub(crate) fn fold_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive containment of an already folded needle.
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_query() {
        assert_eq!(fold_query("  QuEEn "), "queen");
        assert_eq!(fold_query("   "), "");
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Freddie Mercury", "merc"));
        assert!(contains_folded("Beyoncé", "beyoncé"));
        assert!(!contains_folded("Brian May", "freddie"));
        assert!(contains_folded("anything", ""));
    }
}
