//! Query tokenization and stopword filtering.

/// Filler words excluded from queries before scoring.
///
/// Tokens are compared against this set exactly, before lowercasing, so the
/// entries are deliberately all lowercase.
pub const STOPWORDS: [&str; 4] = ["of", "a", "with", "then"];

/// Splits a query into the lowercased tokens worth scoring.
///
/// Tokens come from Unicode-whitespace splitting, so empty and
/// whitespace-only queries yield no tokens. Every token that exactly equals
/// a stopword is dropped; survivors are lowercased for case-insensitive
/// matching.
pub fn significant_tokens(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_tokens() {
        assert!(significant_tokens("").is_empty());
        assert!(significant_tokens("   ").is_empty());
        assert!(significant_tokens("\t \n").is_empty());
    }

    #[test]
    fn test_tokens_are_lowercased() {
        assert_eq!(significant_tokens("Draw PEN"), vec!["draw", "pen"]);
    }

    #[test]
    fn test_all_stopwords_removed() {
        assert!(significant_tokens("of a with then").is_empty());
        assert_eq!(significant_tokens("a draw a of a"), vec!["draw"]);
    }

    #[test]
    fn test_stopword_filter_is_exact() {
        // Filtering runs before lowercasing, so only exact forms are dropped.
        assert_eq!(significant_tokens("OF"), vec!["of"]);
        // A token merely containing a stopword is kept whole.
        assert_eq!(significant_tokens("witharrows"), vec!["witharrows"]);
    }

    #[test]
    fn test_consecutive_whitespace_yields_no_empty_tokens() {
        assert_eq!(significant_tokens("draw   pen"), vec!["draw", "pen"]);
    }
}
