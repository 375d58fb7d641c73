//! # Whole problem tests that require a look inside the crate.
//!
//! Each module describes a single small problem. The driver is stepped through all iterations, and
//! the invariants of the basis are checked at every iteration boundary.
use approx::assert_abs_diff_eq;

use crate::algorithm::revised_simplex::Driver;
use crate::algorithm::revised_simplex::strategy::pivot_rule::PivotRule;
use crate::data::linear_algebra::inner_product;
use crate::data::linear_program::standard_form::StandardForm;

pub mod problem_4;

/// Create a problem from rows of `n` coefficients followed by the right-hand side.
pub fn standard_form(costs: &[f64], rows: &[&[f64]]) -> StandardForm<f64> {
    let (rows, b): (Vec<Vec<f64>>, Vec<f64>) = rows.iter()
        .map(|row| {
            let (rhs, coefficients) = row.split_last().unwrap();
            (coefficients.to_vec(), *rhs)
        })
        .unzip();

    StandardForm::new(costs.to_vec(), rows, b).unwrap()
}

/// Check the basis invariants that should hold between iterations.
pub fn assert_invariants<PR: PivotRule>(driver: &Driver<'_, f64, PR>) {
    let state = driver.state();
    let problem = state.problem();

    assert!(state.is_partition(), "basis {:?} and nonbasis {:?} don't partition the variables", driver.basis(), driver.nonbasis());
    assert!(driver.bbar().iter().all(|&value| value >= 0f64), "negative basic value in {:?}", driver.bbar());

    for (i, &variable) in driver.basis().iter().enumerate() {
        // Basic columns are priced at their cost
        let price = inner_product(driver.dual(), problem.column(variable));
        assert_abs_diff_eq!(price, problem.cost(variable), epsilon = 1e-9);

        // Basic columns map to unit vectors
        let column = driver.transform(variable);
        for (k, &value) in column.iter().enumerate() {
            let expected = if k == i { 1f64 } else { 0f64 };
            assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
        }
    }

    for (&variable, &reduced_cost) in driver.nonbasis().iter().zip(driver.reduced_costs()) {
        let expected = problem.cost(variable) - inner_product(driver.dual(), problem.column(variable));
        assert_abs_diff_eq!(reduced_cost, expected, epsilon = 1e-9);
    }
}
