//! Weighted substring scoring.
//!
//! Name matches outweigh description matches, and every token of a query
//! accumulates into a single score per component.

/// Score added when a token occurs in the component name.
pub const NAME_WEIGHT: u32 = 3;

/// Score added when a token occurs in the component description.
pub const DESCRIPTION_WEIGHT: u32 = 2;

/// Accumulates the relevance of one component against a set of query tokens.
///
/// `name` and `description` must already be lowercased; the tokenizer hands
/// tokens over lowercased as well. Each token adds [`NAME_WEIGHT`] when it is
/// a substring of the name and [`DESCRIPTION_WEIGHT`] when it is a substring
/// of the description. Zero means no match at all.
pub fn score_component(tokens: &[String], name: &str, description: &str) -> u32 {
    let mut score = 0;

    for token in tokens {
        if name.contains(token.as_str()) {
            score += NAME_WEIGHT;
        }
        if description.contains(token.as_str()) {
            score += DESCRIPTION_WEIGHT;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_name_match_scores_three() {
        let score = score_component(&tokens(&["tool"]), "drawtool", "draw shapes");
        assert_eq!(score, NAME_WEIGHT);
    }

    #[test]
    fn test_description_match_scores_two() {
        let score = score_component(&tokens(&["shapes"]), "drawtool", "draw shapes");
        assert_eq!(score, DESCRIPTION_WEIGHT);
    }

    #[test]
    fn test_name_and_description_accumulate() {
        // "draw" hits both fields: 3 + 2 in one accumulated score.
        let score = score_component(&tokens(&["draw"]), "drawtool", "draw shapes with a pen");
        assert_eq!(score, NAME_WEIGHT + DESCRIPTION_WEIGHT);
    }

    #[test]
    fn test_tokens_sum_across_the_query() {
        let score = score_component(
            &tokens(&["draw", "pen"]),
            "drawtool",
            "draw shapes with a pen",
        );
        assert_eq!(score, (NAME_WEIGHT + DESCRIPTION_WEIGHT) + DESCRIPTION_WEIGHT);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let score = score_component(&tokens(&["zzz"]), "drawtool", "draw shapes");
        assert_eq!(score, 0);
    }

    #[test]
    fn test_no_tokens_scores_zero() {
        assert_eq!(score_component(&[], "drawtool", "draw shapes"), 0);
    }
}
