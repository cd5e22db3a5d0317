//! Problem instance and solution evaluation.

use crate::error::Error;

/// A candidate selection: `solution[i]` is true iff item `i` is packed.
///
/// Feasibility (total weight within capacity) is maintained by the
/// annealer's construction and repair steps, not by the type.
pub type Solution = Vec<bool>;

/// An immutable 0/1 knapsack instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    capacity: u64,
    profit: Vec<u64>,
    weight: Vec<u64>,
}

impl Instance {
    /// Builds an instance, rejecting mismatched profit/weight lengths.
    pub fn new(capacity: u64, profit: Vec<u64>, weight: Vec<u64>) -> Result<Self, Error> {
        if profit.len() != weight.len() {
            return Err(Error::Input(format!(
                "profit and weight counts differ: {} vs {}",
                profit.len(),
                weight.len()
            )));
        }
        Ok(Self {
            capacity,
            profit,
            weight,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.profit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profit.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn profit(&self) -> &[u64] {
        &self.profit
    }

    pub fn weight(&self) -> &[u64] {
        &self.weight
    }

    /// Total profit of the selected items. Pure; higher is better.
    ///
    /// # Panics
    ///
    /// Panics if `solution` is not `self.len()` long — that is a
    /// programming error, not a recoverable condition.
    pub fn cost(&self, solution: &Solution) -> u64 {
        assert_eq!(solution.len(), self.len(), "solution length mismatch");
        solution
            .iter()
            .zip(&self.profit)
            .filter(|(&selected, _)| selected)
            .map(|(_, &p)| p)
            .sum()
    }

    /// Total weight of the selected items.
    pub fn total_weight(&self, solution: &Solution) -> u64 {
        assert_eq!(solution.len(), self.len(), "solution length mismatch");
        solution
            .iter()
            .zip(&self.weight)
            .filter(|(&selected, _)| selected)
            .map(|(_, &w)| w)
            .sum()
    }

    /// Whether the selection respects the capacity constraint.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.total_weight(solution) <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = Instance::new(10, vec![1, 2, 3], vec![1, 2]).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_cost_sums_selected_profits() {
        let instance = Instance::new(100, vec![60, 100, 120], vec![10, 20, 30]).unwrap();
        assert_eq!(instance.cost(&vec![true, false, true]), 180);
        assert_eq!(instance.cost(&vec![false, false, false]), 0);
        assert_eq!(instance.cost(&vec![true, true, true]), 280);
    }

    #[test]
    fn test_feasibility_is_weight_within_capacity() {
        let instance = Instance::new(30, vec![60, 100, 120], vec![10, 20, 30]).unwrap();
        assert!(instance.is_feasible(&vec![true, true, false]));
        assert!(!instance.is_feasible(&vec![true, true, true]));
        assert_eq!(instance.total_weight(&vec![true, true, true]), 60);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(0, vec![], vec![]).unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.cost(&vec![]), 0);
        assert!(instance.is_feasible(&vec![]));
    }

    #[test]
    #[should_panic(expected = "solution length mismatch")]
    fn test_cost_panics_on_wrong_length() {
        let instance = Instance::new(10, vec![1, 2], vec![1, 2]).unwrap();
        instance.cost(&vec![true]);
    }
}
