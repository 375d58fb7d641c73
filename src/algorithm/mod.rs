//! # Algorithms
use std::fmt::Debug;

use num_traits::Float;

use crate::algorithm::revised_simplex::{Driver, Observer};
use crate::algorithm::revised_simplex::config::Config;
use crate::algorithm::revised_simplex::state::SizeExceeded;
use crate::algorithm::revised_simplex::strategy::pivot_rule::Dantzig;
use crate::data::linear_program::elements::VariableId;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;

pub mod revised_simplex;

/// A solve ends optimal, unbounded, infeasible or without an answer.
///
/// This is determined as the result of an algorithm. All variants are final.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// No nonbasic variable has a positive reduced cost.
    Optimal(Solution<F>),
    /// The ratio test found no row to pivot on.
    Unbounded {
        /// Variable that could be increased without bound.
        entering: VariableId,
        /// Its column with respect to the final basis.
        direction: Vec<F>,
    },
    /// A basic value became negative after a basis change.
    ///
    /// Can only happen when the right-hand side wasn't nonnegative to begin with, or through
    /// rounding.
    Infeasible {
        /// First row with a negative value.
        row: usize,
        /// Basic variable of that row.
        variable: VariableId,
        /// All basic values after the update.
        bbar: Vec<F>,
    },
    /// The iteration limit was reached before any of the other states.
    Exhausted {
        /// The iteration limit.
        iterations: usize,
    },
}

/// Solve a problem with the revised simplex method, using Dantzig's pivot rule.
///
/// # Errors
///
/// If the problem exceeds the dimensions allowed by the `config`. No iteration is done in that
/// case.
pub fn solve<F: Float + Debug>(
    problem: &StandardForm<F>,
    config: Config<F>,
) -> Result<OptimizationResult<F>, SizeExceeded> {
    solve_with(problem, config, &mut ())
}

/// Solve a problem and report every iteration to an observer.
///
/// # Errors
///
/// If the problem exceeds the dimensions allowed by the `config`.
pub fn solve_with<F: Float + Debug>(
    problem: &StandardForm<F>,
    config: Config<F>,
    observer: &mut impl Observer<F>,
) -> Result<OptimizationResult<F>, SizeExceeded> {
    let mut driver = Driver::<F, Dantzig>::new(problem, config)?;
    Ok(driver.run(observer))
}
