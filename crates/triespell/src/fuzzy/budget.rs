// Per-operation edit budgets for the fuzzy search.

/// Independent allowances for each edit operation.
///
/// A zero allowance disables that operation. Budgets are compared
/// componentwise: see [`EditBudget::covers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EditBudget {
    /// Letters the typed word is missing.
    pub insertions: u32,
    /// Extra letters in the typed word.
    pub deletions: u32,
    /// Adjacent transpositions.
    pub swaps: u32,
    /// Wrong letters.
    pub substitutions: u32,
}

impl EditBudget {
    pub fn new(insertions: u32, deletions: u32, swaps: u32, substitutions: u32) -> Self {
        Self {
            insertions,
            deletions,
            swaps,
            substitutions,
        }
    }

    /// The same allowance for every operation.
    pub fn uniform(n: u32) -> Self {
        Self::new(n, n, n, n)
    }

    pub fn with_insertions(mut self, n: u32) -> Self {
        self.insertions = n;
        self
    }

    pub fn with_deletions(mut self, n: u32) -> Self {
        self.deletions = n;
        self
    }

    pub fn with_swaps(mut self, n: u32) -> Self {
        self.swaps = n;
        self
    }

    pub fn with_substitutions(mut self, n: u32) -> Self {
        self.substitutions = n;
        self
    }

    /// Returns `true` if no edit is allowed at all.
    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Sum of all allowances.
    pub fn total(&self) -> u64 {
        u64::from(self.insertions)
            + u64::from(self.deletions)
            + u64::from(self.swaps)
            + u64::from(self.substitutions)
    }

    /// Returns `true` if `self` allows at least as much as `other` for every
    /// operation.
    pub fn covers(&self, other: &EditBudget) -> bool {
        self.insertions >= other.insertions
            && self.deletions >= other.deletions
            && self.swaps >= other.swaps
            && self.substitutions >= other.substitutions
    }

    // The spend helpers are only called after checking the allowance is
    // positive.

    pub(crate) fn spend_insertion(mut self) -> Self {
        self.insertions -= 1;
        self
    }

    pub(crate) fn spend_deletion(mut self) -> Self {
        self.deletions -= 1;
        self
    }

    pub(crate) fn spend_swap(mut self) -> Self {
        self.swaps -= 1;
        self
    }

    pub(crate) fn spend_substitution(mut self) -> Self {
        self.substitutions -= 1;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert!(EditBudget::default().is_zero());
        assert!(!EditBudget::default().with_swaps(1).is_zero());
    }

    #[test]
    fn builders_set_single_field() {
        let budget = EditBudget::default().with_insertions(1).with_substitutions(3);
        assert_eq!(budget, EditBudget::new(1, 0, 0, 3));
        assert_eq!(budget.total(), 4);
    }

    #[test]
    fn covers_is_componentwise() {
        let small = EditBudget::new(1, 0, 1, 0);
        let large = EditBudget::new(1, 2, 1, 0);
        assert!(large.covers(&small));
        assert!(!small.covers(&large));
        assert!(small.covers(&small));
        assert!(!EditBudget::new(0, 5, 5, 5).covers(&small));
    }

    #[test]
    fn spending_decrements_one_field() {
        let budget = EditBudget::uniform(2);
        assert_eq!(budget.spend_insertion(), EditBudget::new(1, 2, 2, 2));
        assert_eq!(budget.spend_deletion(), EditBudget::new(2, 1, 2, 2));
        assert_eq!(budget.spend_swap(), EditBudget::new(2, 2, 1, 2));
        assert_eq!(budget.spend_substitution(), EditBudget::new(2, 2, 2, 1));
    }
}
