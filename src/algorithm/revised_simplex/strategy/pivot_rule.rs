//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis.
use num_traits::Float;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see the `ratio_test` module.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `reduced_costs`: Reduced cost of each nonbasic variable, in nonbasis order.
    ///
    /// # Return value
    ///
    /// Position in the nonbasis of the entering variable. `None` if no reduced cost is positive,
    /// meaning that the current basis is optimal.
    fn select_primal_pivot_column<F: Float>(&mut self, reduced_costs: &[F]) -> Option<usize>;
}

/// Pivot on the column with the largest positive reduced cost.
///
/// When several columns share the largest value, the first one is chosen. This rule can cycle on
/// degenerate problems; only the iteration limit stops that.
pub struct Dantzig;
impl PivotRule for Dantzig {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float>(&mut self, reduced_costs: &[F]) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (j, &cost) in reduced_costs.iter().enumerate() {
            if cost > best.map_or(F::zero(), |(_, highest)| highest) {
                best = Some((j, cost));
            }
        }

        best.map(|(j, _)| j)
    }
}

/// Simply pivot on the first column, which has a positive reduced cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float>(&mut self, reduced_costs: &[F]) -> Option<usize> {
        reduced_costs.iter().position(|&cost| cost > F::zero())
    }
}
