// Suggestion status: deduplicating collector with an abort condition.

use hashbrown::HashSet;

/// Collects suggestions in discovery order, ignoring repeats, and tells the
/// producer when enough have been found.
///
/// Used by the fuzzy search to cap its result and by the combinators to
/// merge their children's lists.
#[derive(Debug, Clone)]
pub struct SuggestionStatus {
    /// Maximum number of suggestions that can be collected.
    max_suggestions: usize,
    /// Collected suggestions.
    suggestions: Vec<String>,
    /// Set of already-seen suggestion strings for deduplication.
    seen: HashSet<String>,
}

impl SuggestionStatus {
    /// Create a collector that stops accepting after `max_suggestions`.
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            max_suggestions,
            suggestions: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Create a collector without a size limit.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Returns `true` once the maximum suggestion count is reached.
    pub fn should_abort(&self) -> bool {
        self.suggestions.len() >= self.max_suggestions
    }

    /// Add a suggestion. Returns `true` if it was new and accepted.
    ///
    /// Duplicates and suggestions past the limit are silently ignored.
    pub fn add_suggestion(&mut self, suggestion: String) -> bool {
        if self.should_abort() {
            return false;
        }
        if self.seen.contains(&suggestion) {
            return false;
        }
        self.seen.insert(suggestion.clone());
        self.suggestions.push(suggestion);
        true
    }

    /// Add every suggestion of `suggestions` in order.
    pub fn extend<I>(&mut self, suggestions: I)
    where
        I: IntoIterator<Item = String>,
    {
        for suggestion in suggestions {
            self.add_suggestion(suggestion);
        }
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn max_suggestion_count(&self) -> usize {
        self.max_suggestions
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Return a reference to the collected suggestions.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Consume the status and return the collected suggestions.
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_is_empty() {
        let status = SuggestionStatus::new(5);
        assert_eq!(status.suggestion_count(), 0);
        assert_eq!(status.max_suggestion_count(), 5);
        assert!(!status.should_abort());
    }

    #[test]
    fn should_abort_when_max_suggestions_reached() {
        let mut status = SuggestionStatus::new(2);
        status.add_suggestion("a".to_string());
        assert!(!status.should_abort());
        status.add_suggestion("b".to_string());
        assert!(status.should_abort());
    }

    #[test]
    fn duplicate_suggestions_are_ignored() {
        let mut status = SuggestionStatus::unbounded();
        assert!(status.add_suggestion("test".to_string()));
        assert!(!status.add_suggestion("test".to_string()));
        assert_eq!(status.suggestion_count(), 1);
    }

    #[test]
    fn excess_suggestions_are_dropped() {
        let mut status = SuggestionStatus::new(2);
        status.extend(["a", "b", "c"].map(String::from));
        assert_eq!(status.suggestions(), ["a", "b"]);
    }

    #[test]
    fn extend_keeps_first_occurrence_order() {
        let mut status = SuggestionStatus::unbounded();
        status.extend(["b", "a"].map(String::from));
        status.extend(["a", "c", "b"].map(String::from));
        assert_eq!(status.into_suggestions(), vec!["b", "a", "c"]);
    }

    #[test]
    fn zero_limit_accepts_nothing() {
        let mut status = SuggestionStatus::new(0);
        assert!(status.should_abort());
        assert!(!status.add_suggestion("a".to_string()));
        assert!(status.is_empty());
    }
}
