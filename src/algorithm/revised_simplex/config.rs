//! # Solver limits
//!
//! The solver works with fixed upper bounds on the problem size and the number of iterations. They
//! are checked before the first iteration and while iterating, respectively.
use enum_map::{Enum, EnumMap, enum_map};
use num_traits::Float;

/// Default maximum number of iterations, also the capacity of the eta file.
pub const MAX_ITERATIONS: usize = 100;
/// Default maximum number of original variables.
pub const MAX_VARIABLES: usize = 20;
/// Default maximum number of constraints.
pub const MAX_CONSTRAINTS: usize = 20;
/// Default tolerance below which basic values are rounded to zero.
pub const TOLERANCE: f64 = 0.001;

/// A quantity with a configured upper bound.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Limit {
    /// Number of simplex iterations before giving up.
    Iterations,
    /// Number of original variables `n`.
    Variables,
    /// Number of constraints `m`.
    Constraints,
}

/// Limits and tolerance used by a solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Config<F> {
    limits: EnumMap<Limit, usize>,
    tolerance: F,
}

impl<F: Float> Config<F> {
    /// Change a single limit.
    #[must_use]
    pub fn with_limit(mut self, limit: Limit, value: usize) -> Self {
        self.limits[limit] = value;
        self
    }

    /// Change the tolerance.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Positive value. Basic values of smaller magnitude are rounded to zero.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        debug_assert!(tolerance >= F::zero());

        self.tolerance = tolerance;
        self
    }

    /// Current value of a limit.
    pub fn limit(&self, limit: Limit) -> usize {
        self.limits[limit]
    }

    /// Rounding and feasibility tolerance.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }
}

impl<F: Float> Default for Config<F> {
    fn default() -> Self {
        Self {
            limits: enum_map! {
                Limit::Iterations => MAX_ITERATIONS,
                Limit::Variables => MAX_VARIABLES,
                Limit::Constraints => MAX_CONSTRAINTS,
            },
            tolerance: F::from(TOLERANCE).unwrap_or_else(F::epsilon),
        }
    }
}
