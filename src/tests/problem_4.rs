//! Degenerate.
//!
//! Maximize `2 x1 + x2` subject to `x1 <= 2` and `x1 + x2 <= 2`. Both rows tie in the first ratio
//! test, and the second pivot has a ratio of zero.
use approx::assert_abs_diff_eq;

use crate::algorithm::{OptimizationResult, solve_with};
use crate::algorithm::revised_simplex::config::Config;
use crate::algorithm::revised_simplex::Driver;
use crate::data::linear_program::elements::VariableId;
use crate::data::linear_program::standard_form::StandardForm;
use crate::tests::{assert_invariants, standard_form};

pub fn problem() -> StandardForm<f64> {
    standard_form(&[2f64, 1f64], &[
        &[1f64, 0f64, 2f64],
        &[1f64, 1f64, 2f64],
    ])
}

fn x(number: usize) -> VariableId {
    VariableId::new(number).unwrap()
}

#[test]
fn tie_goes_to_first_row() {
    let problem = problem();

    let mut iterations = Vec::new();
    let result = solve_with(&problem, Config::default(), &mut iterations).unwrap();

    assert_eq!(iterations[0].ratios, vec![(x(3), 2f64), (x(4), 2f64)]);
    assert_eq!(iterations[0].leaving, Some(x(3)));
    assert_eq!(iterations[0].pivot_row, Some(0));

    // Degenerate pivot
    assert_eq!(iterations[1].bbar, vec![2f64, 0f64]);
    assert_eq!(iterations[1].entering, Some(x(2)));
    assert_eq!(iterations[1].ratios, vec![(x(4), 0f64)]);
    assert_eq!(iterations[1].leaving, Some(x(4)));

    match result {
        OptimizationResult::Optimal(solution) => {
            assert_abs_diff_eq!(solution.objective_value(), 4f64, epsilon = 1e-12);
            assert_eq!(solution.values(), &[2f64, 0f64, 0f64, 0f64]);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn deterministic() {
    let problem = problem();

    let runs = (0..3)
        .map(|_| {
            let mut iterations = Vec::new();
            let result = solve_with(&problem, Config::default(), &mut iterations).unwrap();
            (iterations, result)
        })
        .collect::<Vec<_>>();

    assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn invariants_hold() {
    let problem = problem();
    let mut driver = Driver::<_>::new(&problem, Config::default()).unwrap();

    loop {
        assert_invariants(&driver);
        if driver.step(&mut ()).is_some() {
            break;
        }
    }
    assert_eq!(driver.eta_file().len(), 2);
    assert_eq!(driver.dual(), &[1f64, 1f64]);
}
