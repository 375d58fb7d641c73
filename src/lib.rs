//! # A revised simplex solver
//!
//! Linear programs in standard form (maximize `c^T x` subject to `Ax = b`, `x >= 0`) are solved
//! with the Revised Simplex Method. The basis inverse is represented in product form, as a file of
//! eta vectors. Every intermediate quantity (basis, basic values, dual vector, reduced costs) is
//! exposed through per-iteration snapshots.
//!
//! ```
//! use revised_simplex::algorithm::{OptimizationResult, solve};
//! use revised_simplex::algorithm::revised_simplex::config::Config;
//! use revised_simplex::data::linear_program::standard_form::StandardForm;
//!
//! // Maximize 3 x1 + 2 x2 subject to x1 + x2 <= 4
//! let problem = StandardForm::new(vec![3f64, 2f64], vec![vec![1f64, 1f64]], vec![4f64]).unwrap();
//! match solve(&problem, Config::default()).unwrap() {
//!     OptimizationResult::Optimal(solution) => assert_eq!(solution.objective_value(), 12f64),
//!     _ => unreachable!(),
//! }
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
