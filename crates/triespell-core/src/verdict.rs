// Checker verdict: misspelled flag plus correction candidates.

/// The result of checking one word.
///
/// A verdict is either "not flagged" (no suggestions) or "misspelled" with
/// zero or more distinct suggestions in discovery order. With the `serde`
/// feature it serializes as `{"misspelled": .., "suggestions": [..]}`; it is
/// output only and cannot be deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    misspelled: bool,
    suggestions: Vec<String>,
}

impl Verdict {
    /// The word is not flagged.
    pub fn correct() -> Self {
        Self::default()
    }

    /// The word is flagged, with the given suggestions.
    ///
    /// The caller is responsible for deduplicating `suggestions`.
    pub fn misspelled(suggestions: Vec<String>) -> Self {
        Self {
            misspelled: true,
            suggestions,
        }
    }

    /// Flag the word without proposing corrections.
    pub fn flagged() -> Self {
        Self::misspelled(Vec::new())
    }

    /// Build a verdict from a plain flag. Suggestions are empty either way.
    pub fn from_flag(misspelled: bool) -> Self {
        if misspelled {
            Self::flagged()
        } else {
            Self::correct()
        }
    }

    pub fn is_misspelled(&self) -> bool {
        self.misspelled
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions
    }

    /// Split the verdict into its flag and suggestions.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.misspelled, self.suggestions)
    }
}
