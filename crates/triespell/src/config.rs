// Serializable description of a checker tree.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::checker::Checker;
use crate::combinator::{Intersect, Union};
use crate::fuzzy::{BoundedFuzzy, EditBudget};
use crate::simple::{ExactMatch, LengthGate};

/// Error type for checker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not a valid checker description.
    #[error("invalid checker configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A checker tree as data.
///
/// Internally tagged by `type`. Unknown fields are rejected, so a
/// misspelled budget name is an error rather than a zero budget:
///
/// ```
/// use triespell::CheckerConfig;
///
/// let config = CheckerConfig::from_json(r#"{
///     "type": "intersect",
///     "checkers": [
///         { "type": "length_gate", "threshold": 4 },
///         { "type": "bounded_fuzzy", "substitutions": 1 }
///     ]
/// }"#).unwrap();
/// let _checker = config.build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum CheckerConfig {
    LengthGate {
        threshold: usize,
    },
    ExactMatch,
    BoundedFuzzy {
        #[serde(default)]
        insertions: u32,
        #[serde(default)]
        deletions: u32,
        #[serde(default)]
        swaps: u32,
        #[serde(default)]
        substitutions: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_suggestions: Option<usize>,
    },
    Union {
        checkers: Vec<CheckerConfig>,
    },
    Intersect {
        checkers: Vec<CheckerConfig>,
    },
}

impl CheckerConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe a fuzzy checker with the given budget and default cap.
    pub fn fuzzy(budget: EditBudget) -> Self {
        CheckerConfig::BoundedFuzzy {
            insertions: budget.insertions,
            deletions: budget.deletions,
            swaps: budget.swaps,
            substitutions: budget.substitutions,
            max_suggestions: None,
        }
    }

    /// Instantiate the described checker tree.
    pub fn build(&self) -> Box<dyn Checker> {
        let checker = self.build_node();
        debug!("built checker tree with {} node(s)", self.node_count());
        checker
    }

    fn build_node(&self) -> Box<dyn Checker> {
        match self {
            CheckerConfig::LengthGate { threshold } => Box::new(LengthGate::new(*threshold)),
            CheckerConfig::ExactMatch => Box::new(ExactMatch),
            CheckerConfig::BoundedFuzzy {
                insertions,
                deletions,
                swaps,
                substitutions,
                max_suggestions,
            } => {
                let budget = EditBudget::new(*insertions, *deletions, *swaps, *substitutions);
                let mut fuzzy = BoundedFuzzy::new(budget);
                if let Some(max) = max_suggestions {
                    fuzzy = fuzzy.with_max_suggestions(*max);
                }
                Box::new(fuzzy)
            }
            CheckerConfig::Union { checkers } => {
                Box::new(Union::new(checkers.iter().map(Self::build_node).collect()))
            }
            CheckerConfig::Intersect { checkers } => {
                Box::new(Intersect::new(checkers.iter().map(Self::build_node).collect()))
            }
        }
    }

    /// Number of checkers in the tree, combinators included.
    pub fn node_count(&self) -> usize {
        match self {
            CheckerConfig::Union { checkers } | CheckerConfig::Intersect { checkers } => {
                1 + checkers.iter().map(Self::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}
