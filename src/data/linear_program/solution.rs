//! # Representation of optimal solutions
//!
//! Once the simplex method reaches optimality, a solution is derived from the final basis. It
//! contains a value for every variable, including the slack variables that were added for each
//! constraint.
use crate::data::linear_program::elements::VariableId;

/// Represents a full solution to a linear program in standard form.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function, computed as `y b`.
    objective_value: F,
    /// Value of each variable, indexed by `VariableId::index`.
    values: Vec<F>,
    /// The first `nr_original_variables` values belong to the original variables, the rest are
    /// slacks.
    nr_original_variables: usize,
}

impl<F: Copy> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Objective function value at this solution.
    /// * `values`: Values of all variables, original variables first.
    /// * `nr_original_variables`: How many of the values belong to original variables.
    pub fn new(objective_value: F, values: Vec<F>, nr_original_variables: usize) -> Self {
        debug_assert!(nr_original_variables <= values.len());

        Self {
            objective_value,
            values,
            nr_original_variables,
        }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Value of a single variable.
    pub fn value(&self, variable: VariableId) -> F {
        self.values[variable.index()]
    }

    /// Values of all variables, in increasing variable order.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// (variable, value) tuples of the original variables.
    pub fn original(&self) -> impl Iterator<Item=(VariableId, F)> + '_ {
        self.values[..self.nr_original_variables].iter()
            .enumerate()
            .map(|(i, &value)| (VariableId::from_index(i), value))
    }

    /// (variable, value) tuples of the slack variables.
    pub fn slack(&self) -> impl Iterator<Item=(VariableId, F)> + '_ {
        let offset = self.nr_original_variables;
        self.values[offset..].iter()
            .enumerate()
            .map(move |(i, &value)| (VariableId::from_index(offset + i), value))
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::VariableId;
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn split_original_and_slack() {
        let solution = Solution::new(36f64, vec![2f64, 6f64, 2f64, 0f64, 0f64], 2);

        assert_eq!(solution.objective_value(), 36f64);
        assert_eq!(solution.value(VariableId::new(2).unwrap()), 6f64);
        assert_eq!(
            solution.original().map(|(v, x)| (v.number(), x)).collect::<Vec<_>>(),
            vec![(1, 2f64), (2, 6f64)],
        );
        assert_eq!(
            solution.slack().map(|(v, x)| (v.number(), x)).collect::<Vec<_>>(),
            vec![(3, 2f64), (4, 0f64), (5, 0f64)],
        );
    }
}
