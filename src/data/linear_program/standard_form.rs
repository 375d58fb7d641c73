//! # Standard form linear program
//!
//! Maximize `c^T x` subject to `Ax = b` and `x >= 0`, where the last `m` columns of `A` are slack
//! columns that form an identity matrix.
use num_traits::Float;

use crate::data::linear_program::elements::VariableId;
use crate::io::error::InconsistencyError;

/// Static data of a linear program in standard form.
///
/// Built once from the `n` original columns; a slack column is appended for every constraint. The
/// data is never modified by the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Cost of every variable, indexed by `VariableId::index`. Slack variables have zero cost.
    costs: Vec<F>,
    /// Column major constraint matrix, including the slack columns.
    ///
    /// Every column has length `m`.
    columns: Vec<Vec<F>>,
    /// Right-hand side of length `m`.
    b: Vec<F>,
    nr_original_variables: usize,
}

impl<F: Float> StandardForm<F> {
    /// Create a new linear program, adding a slack variable for each constraint.
    ///
    /// # Arguments
    ///
    /// * `costs`: Objective coefficients of the `n` original variables.
    /// * `rows`: The `m` constraint rows, each of length `n`.
    /// * `b`: The `m` right-hand side values.
    ///
    /// # Errors
    ///
    /// When there are no variables or constraints, when the lengths don't match up or when a value
    /// is not finite.
    pub fn new(costs: Vec<F>, rows: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, InconsistencyError> {
        let nr_original_variables = costs.len();
        let nr_constraints = rows.len();

        if nr_original_variables == 0 {
            return Err(InconsistencyError::new("The problem has no variables"));
        }
        if nr_constraints == 0 {
            return Err(InconsistencyError::new("The problem has no constraints"));
        }
        if b.len() != nr_constraints {
            return Err(InconsistencyError::new(format!(
                "There are {} constraint rows but {} right-hand side values",
                nr_constraints, b.len(),
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nr_original_variables) {
            return Err(InconsistencyError::new(format!(
                "Constraint row {} has {} coefficients, expected {}",
                i + 1, row.len(), nr_original_variables,
            )));
        }
        let mut all_values = costs.iter().chain(rows.iter().flatten()).chain(b.iter());
        if all_values.any(|value| !value.is_finite()) {
            return Err(InconsistencyError::new("All coefficients should be finite"));
        }

        let structural = (0..nr_original_variables)
            .map(|j| rows.iter().map(|row| row[j]).collect::<Vec<_>>());
        let slack = (0..nr_constraints)
            .map(|k| (0..nr_constraints)
                .map(|i| if i == k { F::one() } else { F::zero() })
                .collect::<Vec<_>>()
            );
        let columns = structural.chain(slack).collect();

        let mut costs = costs;
        costs.extend((0..nr_constraints).map(|_| F::zero()));

        Ok(Self {
            costs,
            columns,
            b,
            nr_original_variables,
        })
    }

    /// Column of the constraint matrix belonging to a variable.
    ///
    /// # Return value
    ///
    /// Slice of length `m`.
    pub fn column(&self, variable: VariableId) -> &[F] {
        debug_assert!(variable.index() < self.nr_variables());

        &self.columns[variable.index()]
    }

    /// Objective coefficient of a variable.
    pub fn cost(&self, variable: VariableId) -> F {
        debug_assert!(variable.index() < self.nr_variables());

        self.costs[variable.index()]
    }

    /// Objective coefficients of all `m + n` variables.
    pub fn costs(&self) -> &[F] {
        &self.costs
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Value of the constraint matrix at row `i` for a variable.
    pub fn coefficient(&self, i: usize, variable: VariableId) -> F {
        debug_assert!(i < self.nr_constraints());

        self.column(variable)[i]
    }

    /// Number of constraints `m`, also the size of the basis.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }

    /// Number of variables `n` that were in the input.
    pub fn nr_original_variables(&self) -> usize {
        self.nr_original_variables
    }

    /// Number of variables `m + n`, including slacks.
    pub fn nr_variables(&self) -> usize {
        self.columns.len()
    }

    /// All variables, in increasing order.
    pub fn variables(&self) -> impl Iterator<Item=VariableId> + use<F> {
        (0..self.nr_variables()).map(VariableId::from_index)
    }

    /// The original variables `x1` through `xn`.
    pub fn original_variables(&self) -> impl Iterator<Item=VariableId> + use<F> {
        (0..self.nr_original_variables).map(VariableId::from_index)
    }

    /// The slack variables `x(n + 1)` through `x(n + m)`, in constraint order.
    pub fn slack_variables(&self) -> impl Iterator<Item=VariableId> + use<F> {
        (self.nr_original_variables..self.nr_variables()).map(VariableId::from_index)
    }
}
