//! Case-insensitive substring matching for record names.
//!
//! # Responsibility
//! - Implement the single matching rule shared by persona and journey
//!   list filtering.
//!
//! # Invariants
//! - A record matches iff `lowercase(name)` contains `lowercase(query)`.
//! - The empty query matches every name.

/// Reusable name matcher with a pre-lowered needle.
#[derive(Debug, Clone)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    /// Builds a matcher for one search-box query.
    ///
    /// The query is lowered once here so repeated [`matches`](Self::matches)
    /// calls over a store only lower the candidate side.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether this filter accepts every name.
    pub fn matches_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Applies the case-insensitive substring rule to one candidate name.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::NameFilter;

    #[test]
    fn empty_query_matches_everything() {
        let filter = NameFilter::new("");
        assert!(filter.matches_all());
        assert!(filter.matches("Urban Professional Sarah"));
        assert!(filter.matches(""));
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let filter = NameFilter::new("SARAH");
        assert!(filter.matches("Urban Professional Sarah"));

        let filter = NameFilter::new("sarah");
        assert!(filter.matches("SARAH"));
    }

    #[test]
    fn substring_matches_anywhere_in_the_name() {
        let filter = NameFilter::new("ale");
        assert!(filter.matches("Tech Enthusiast Alex"));
        assert!(!filter.matches("Urban Professional Sarah"));
    }

    #[test]
    fn query_is_not_trimmed() {
        // A whitespace query is a real needle, matching only names that
        // contain whitespace.
        let filter = NameFilter::new(" ");
        assert!(filter.matches("Urban Sarah"));
        assert!(!filter.matches("Sarah"));
    }
}
