//! # Problem state
//!
//! The evolving partition of the variables into basic and nonbasic variables, together with the
//! values of the basic variables.
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use num_traits::Float;

use crate::algorithm::revised_simplex::config::{Config, Limit};
use crate::data::linear_program::elements::VariableId;
use crate::data::linear_program::standard_form::StandardForm;

/// Basis partition of a standard form problem.
///
/// Holds only a reference to the (immutable) problem it solves, but owns the data structures that
/// describe the current basis.
///
/// Row `i` of the basis corresponds to `basis[i]`, and `bbar[i]` is the value of that variable.
/// The nonbasic variables are held at zero. Together, `basis` and `nonbasis` contain every
/// variable exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemState<'a, F> {
    problem: &'a StandardForm<F>,
    basis: Vec<VariableId>,
    nonbasis: Vec<VariableId>,
    bbar: Vec<F>,
}

impl<'a, F: Float> ProblemState<'a, F> {
    /// Create the initial state, in which the slack variables form the basis.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem to solve.
    /// * `config`: Contains the maximum problem dimensions.
    ///
    /// # Errors
    ///
    /// If the number of constraints or original variables exceeds the configured maximum.
    pub fn new(problem: &'a StandardForm<F>, config: &Config<F>) -> Result<Self, SizeExceeded> {
        SizeExceeded::check(
            problem.nr_constraints(),
            problem.nr_original_variables(),
            config,
        )?;

        Ok(Self {
            problem,
            basis: problem.slack_variables().collect(),
            nonbasis: problem.original_variables().collect(),
            bbar: problem.b().to_vec(),
        })
    }

    /// Exchange a basic and a nonbasic variable.
    ///
    /// # Arguments
    ///
    /// * `row`: Row of the leaving variable.
    /// * `position`: Position of the entering variable in the nonbasis.
    pub fn exchange(&mut self, row: usize, position: usize) {
        debug_assert!(row < self.basis.len());
        debug_assert!(position < self.nonbasis.len());

        std::mem::swap(&mut self.basis[row], &mut self.nonbasis[position]);
    }

    /// Cost of the basic variable of each row.
    pub fn basic_costs(&self) -> Vec<F> {
        self.basis.iter().map(|&variable| self.problem.cost(variable)).collect()
    }

    /// Value of a variable in the current basic solution.
    ///
    /// Nonbasic variables are zero. Basic values of magnitude at most `tolerance` are reported as
    /// zero as well.
    pub fn value(&self, variable: VariableId, tolerance: F) -> F {
        match self.basis.iter().position(|&basic| basic == variable) {
            Some(row) if self.bbar[row].abs() > tolerance => self.bbar[row],
            _ => F::zero(),
        }
    }

    /// Whether the basis and nonbasis together contain every variable exactly once.
    pub fn is_partition(&self) -> bool {
        let nr_variables = self.problem.nr_variables();
        let unique = self.basis.iter().chain(&self.nonbasis).collect::<HashSet<_>>();

        self.basis.len() == self.problem.nr_constraints()
            && self.nonbasis.len() == self.problem.nr_original_variables()
            && unique.len() == nr_variables
            && unique.iter().all(|variable| variable.index() < nr_variables)
    }

    /// The problem being solved.
    pub fn problem(&self) -> &'a StandardForm<F> {
        self.problem
    }

    /// Basic variables, by row.
    pub fn basis(&self) -> &[VariableId] {
        &self.basis
    }

    /// Nonbasic variables.
    pub fn nonbasis(&self) -> &[VariableId] {
        &self.nonbasis
    }

    /// Values of the basic variables, by row.
    pub fn bbar(&self) -> &[F] {
        &self.bbar
    }

    /// Values of the basic variables, for updating after a pivot.
    pub fn bbar_mut(&mut self) -> &mut [F] {
        &mut self.bbar
    }
}

/// The problem is larger than the configured maximum dimensions.
///
/// Reported before any iteration begins.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SizeExceeded {
    /// Number of constraints `m` of the problem.
    pub constraints: usize,
    /// Number of original variables `n` of the problem.
    pub variables: usize,
    /// Configured maximum for `m`.
    pub max_constraints: usize,
    /// Configured maximum for `n`.
    pub max_variables: usize,
}

impl SizeExceeded {
    /// Compare problem dimensions against the configured maxima.
    ///
    /// Can be used before the problem data is read.
    pub fn check<F: Float>(
        constraints: usize,
        variables: usize,
        config: &Config<F>,
    ) -> Result<(), Self> {
        let max_constraints = config.limit(Limit::Constraints);
        let max_variables = config.limit(Limit::Variables);

        if constraints > max_constraints || variables > max_variables {
            Err(Self { constraints, variables, max_constraints, max_variables })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for SizeExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Linear program is too large: {} constraints and {} variables (at most {} and {})",
            self.constraints, self.variables, self.max_constraints, self.max_variables,
        )
    }
}

impl Error for SizeExceeded {}
