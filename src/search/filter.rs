use serde::Deserialize;

/// What the suggestion panel shows while the query is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQuery {
    /// Keep the panel closed until something is typed.
    #[default]
    None,
    /// Show the whole candidate list.
    All,
}

/// Returns the candidates whose lowercase form contains the lowercase query
/// as a substring, deduplicated, in candidate-list order.
pub fn filter<'a>(query: &str, candidates: &'a [&'a str], empty_query: EmptyQuery) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() && empty_query == EmptyQuery::None {
        return Vec::new();
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for candidate in candidates {
        if seen.contains(candidate) {
            continue;
        }
        seen.push(candidate);
        if query.is_empty() || candidate.to_lowercase().contains(&query) {
            out.push(*candidate);
        }
    }
    out
}

/// Display-only equality check against the raw query.
pub fn is_exact_match(query: &str, candidate: &str) -> bool {
    candidate == query.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: &[&str] = &[
        "Monstera Deliciosa",
        "Monstera Adansonii",
        "Snake Plant",
        "Peace Lily",
        "Snake Plant",
    ];

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let results = filter("monstera", CANDIDATES, EmptyQuery::None);
        assert_eq!(results, vec!["Monstera Deliciosa", "Monstera Adansonii"]);
        for name in &results {
            assert!(name.to_lowercase().contains("monstera"));
        }
    }

    #[test]
    fn substring_can_match_mid_name() {
        let results = filter("lily", CANDIDATES, EmptyQuery::None);
        assert_eq!(results, vec!["Peace Lily"]);
    }

    #[test]
    fn duplicates_are_dropped_keeping_first_position() {
        let results = filter("snake", CANDIDATES, EmptyQuery::None);
        assert_eq!(results, vec!["Snake Plant"]);
    }

    #[test]
    fn order_follows_the_candidate_list() {
        let results = filter("a", CANDIDATES, EmptyQuery::None);
        assert_eq!(
            results,
            vec![
                "Monstera Deliciosa",
                "Monstera Adansonii",
                "Snake Plant",
                "Peace Lily",
            ]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter("nonexistentplant", CANDIDATES, EmptyQuery::None).is_empty());
    }

    #[test]
    fn empty_query_behavior_is_configurable() {
        assert!(filter("", CANDIDATES, EmptyQuery::None).is_empty());
        assert_eq!(filter("", CANDIDATES, EmptyQuery::All).len(), 4);
    }

    #[test]
    fn exact_match_ignores_surrounding_whitespace_only() {
        assert!(is_exact_match("Peace Lily", "Peace Lily"));
        assert!(is_exact_match("  Peace Lily ", "Peace Lily"));
        assert!(!is_exact_match("peace lily", "Peace Lily"));
    }
}
