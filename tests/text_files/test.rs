use approx::assert_abs_diff_eq;

use revised_simplex::algorithm::{OptimizationResult, solve, solve_with};
use revised_simplex::algorithm::revised_simplex::config::{Config, Limit};
use revised_simplex::data::linear_program::elements::VariableId;
use revised_simplex::data::linear_program::solution::Solution;
use revised_simplex::io::error::Import;
use revised_simplex::io::import;
use revised_simplex::io::report::{Printer, Problem};

use super::{get_test_file_path, load};

fn optimum(result: OptimizationResult<f64>) -> Solution<f64> {
    match result {
        OptimizationResult::Optimal(solution) => solution,
        other => panic!("expected an optimum, got {:?}", other),
    }
}

fn assert_values(solution: &Solution<f64>, expected: &[f64]) {
    assert_eq!(solution.values().len(), expected.len());
    for (&actual, &expected) in solution.values().iter().zip(expected) {
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
    }
}

#[test]
fn single_row() {
    let problem = load("single_row");
    let solution = optimum(solve(&problem, Config::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 12f64);
    assert_values(&solution, &[4f64, 0f64, 0f64]);
}

#[test]
fn unbounded() {
    let problem = load("unbounded");

    match solve(&problem, Config::default()).unwrap() {
        OptimizationResult::Unbounded { entering, direction } => {
            assert_eq!(entering, VariableId::new(2).unwrap());
            assert_eq!(direction, vec![-1f64]);
        },
        other => panic!("expected unboundedness, got {:?}", other),
    }
}

#[test]
fn negative_rhs() {
    let problem = load("negative_rhs");

    let result = solve(&problem, Config::default()).unwrap();
    assert_eq!(result, OptimizationResult::Infeasible {
        row: 1,
        variable: VariableId::new(4).unwrap(),
        bbar: vec![2f64, -1f64],
    });
    assert_eq!(
        result.to_string(),
        "The linear program is infeasible: x4 would become negative\nbbar: 2\t-1\n",
    );
}

#[test]
fn degenerate() {
    let problem = load("degenerate");

    let mut iterations = Vec::new();
    let solution = optimum(solve_with(&problem, Config::default(), &mut iterations).unwrap());

    assert_eq!(iterations.len(), 3);
    assert_eq!(iterations[0].leaving, VariableId::new(3));
    assert_eq!(iterations[1].leaving, VariableId::new(4));
    assert_abs_diff_eq!(solution.objective_value(), 4f64);
    assert_values(&solution, &[2f64, 0f64, 0f64, 0f64]);
}

#[test]
fn three_rows() {
    let problem = load("three_rows");
    let solution = optimum(solve(&problem, Config::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 36f64, epsilon = 1e-9);
    assert_values(&solution, &[2f64, 6f64, 2f64, 0f64, 0f64]);
}

#[test]
fn three_by_three() {
    let problem = load("three_by_three");
    let solution = optimum(solve(&problem, Config::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 13f64, epsilon = 1e-9);
    assert_values(&solution, &[2f64, 0f64, 1f64, 0f64, 1f64, 0f64]);
}

#[test]
fn single_precision() {
    let problem = import::<f32>(&get_test_file_path("three_rows"), &Config::default()).unwrap();

    match solve(&problem, Config::default()).unwrap() {
        OptimizationResult::Optimal(solution) => {
            assert_abs_diff_eq!(solution.objective_value(), 36f32, epsilon = 1e-4);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn iteration_limit() {
    let problem = load("three_rows");
    let config = Config::default().with_limit(Limit::Iterations, 1);

    let result = solve(&problem, config).unwrap();
    assert_eq!(result, OptimizationResult::Exhausted { iterations: 1 });
    assert_eq!(result.to_string(), "Max number of iterations reached (1)\nNo optimal solution found\n");
}

#[test]
fn too_many_variables() {
    let config = Config::<f64>::default().with_limit(Limit::Variables, 2);

    match import(&get_test_file_path("three_by_three"), &config) {
        Err(Import::Size(error)) => {
            assert_eq!(error.variables, 3);
            assert_eq!(error.max_variables, 2);
        },
        other => panic!("expected a size error, got {:?}", other),
    }
}

#[test]
fn malformed() {
    match import::<f64>(&get_test_file_path("malformed"), &Config::default()) {
        Err(error @ Import::Parse(_)) => {
            let text = error.to_string();
            assert!(text.contains("Couldn't read constraint 1"));
            assert!(text.contains("\"x\""));
        },
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn missing_file() {
    assert!(matches!(
        import::<f64>(&get_test_file_path("does_not_exist"), &Config::default()),
        Err(Import::IO(_)),
    ));
}

#[test]
fn full_report() {
    let problem = load("single_row");

    let mut printer = Printer::new(Vec::new());
    let result = solve_with(&problem, Config::default(), &mut printer).unwrap();
    let output = String::from_utf8(printer.finish().unwrap()).unwrap();

    assert!(Problem(&problem).to_string().starts_with("m = 1\tn = 2\n"));
    assert!(output.starts_with("--- iteration 1 ---\n"));
    assert!(output.contains("Entering variable is x1\n"));
    assert!(output.contains("--- iteration 2 ---\n"));
    assert!(result.to_string().starts_with("Optimal value of 12 has been reached."));
}
