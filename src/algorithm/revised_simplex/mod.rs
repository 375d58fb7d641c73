//! # Revised simplex method
//!
//! The basis inverse is kept in product form (see `eta_file`). Every iteration prices the nonbasic
//! variables, transforms the entering column, performs the ratio test, records the pivot and
//! recomputes the basic values, dual vector and reduced costs.
//!
//! The driver doesn't print anything. Each iteration is summarized in an `Iteration` snapshot that
//! is handed to an `Observer`.
use std::fmt::Debug;

use log::{debug, info, warn};
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::revised_simplex::config::{Config, Limit};
use crate::algorithm::revised_simplex::eta_file::EtaFile;
use crate::algorithm::revised_simplex::state::{ProblemState, SizeExceeded};
use crate::algorithm::revised_simplex::strategy::pivot_rule::{Dantzig, PivotRule};
use crate::algorithm::revised_simplex::strategy::ratio_test;
use crate::data::linear_algebra::{inner_product, snap_to_zero};
use crate::data::linear_program::elements::VariableId;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;

pub mod config;
pub mod eta_file;
pub mod state;
pub mod strategy;

/// Summary of a single iteration.
///
/// The basis related fields describe the state at the start of the iteration, the remaining
/// fields the decisions that were made during it.
#[derive(Clone, Debug, PartialEq)]
pub struct Iteration<F> {
    /// Iteration counter, starting at `1`.
    pub number: usize,
    /// Nonbasic variables.
    pub nonbasis: Vec<VariableId>,
    /// Basic variables, by row.
    pub basis: Vec<VariableId>,
    /// Values of the basic variables, by row.
    pub bbar: Vec<F>,
    /// Dual vector.
    pub y: Vec<F>,
    /// Reduced costs, aligned with `nonbasis`.
    pub cbar: Vec<F>,
    /// Variable selected to enter the basis; `None` if the basis is optimal.
    pub entering: Option<VariableId>,
    /// Entering column expressed in the current basis.
    pub column: Option<Vec<F>>,
    /// For each row that took part in the ratio test, the basic variable and its ratio.
    pub ratios: Vec<(VariableId, F)>,
    /// Variable selected to leave the basis; `None` if the problem is unbounded.
    pub leaving: Option<VariableId>,
    /// Row of the leaving variable, also the pivot row of the new eta vector.
    pub pivot_row: Option<usize>,
}

/// Receives a snapshot after every iteration.
pub trait Observer<F> {
    /// Called once per iteration, also for the iteration that ends the solve.
    fn observe(&mut self, iteration: &Iteration<F>);
}

/// Ignore all iterations.
impl<F> Observer<F> for () {
    fn observe(&mut self, _iteration: &Iteration<F>) {
    }
}

/// Collect all iterations.
impl<F: Clone> Observer<F> for Vec<Iteration<F>> {
    fn observe(&mut self, iteration: &Iteration<F>) {
        self.push(iteration.clone());
    }
}

/// Steps of a single iteration.
///
/// `Pricing` starts an iteration, after `Recompute` the next one starts with `Pricing` again.
enum Phase<F> {
    Pricing,
    RatioTest {
        position: usize,
    },
    Pivot {
        position: usize,
        row: usize,
        column: Vec<F>,
    },
    Recompute {
        row: usize,
        column: Vec<F>,
        ratio: F,
    },
    Terminal(OptimizationResult<F>),
}

/// State machine of the revised simplex method.
///
/// Owns the basis partition and the eta file. Created once per problem, and consumed by stepping
/// it until a terminal state is reached.
pub struct Driver<'a, F, PR = Dantzig> {
    state: ProblemState<'a, F>,
    eta_file: EtaFile<F>,
    /// Dual vector `y = c_B B^-1`.
    y: Vec<F>,
    /// Reduced costs, aligned with the nonbasis.
    cbar: Vec<F>,
    /// Number of the iteration that will be executed next.
    iteration: usize,
    config: Config<F>,
    rule: PR,
    terminated: bool,
}

impl<'a, F, PR> Driver<'a, F, PR>
where
    F: Float + Debug,
    PR: PivotRule,
{
    /// Set up the slack basis.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem in standard form.
    /// * `config`: Limits and tolerance.
    ///
    /// # Errors
    ///
    /// If the problem is larger than the configured maximum dimensions.
    pub fn new(problem: &'a StandardForm<F>, config: Config<F>) -> Result<Self, SizeExceeded> {
        let state = ProblemState::new(problem, &config)?;
        let eta_file = EtaFile::new(problem.nr_constraints(), config.limit(Limit::Iterations));

        let mut driver = Self {
            state,
            eta_file,
            y: Vec::with_capacity(problem.nr_constraints()),
            cbar: Vec::with_capacity(problem.nr_original_variables()),
            iteration: 1,
            config,
            rule: PR::new(),
            terminated: false,
        };
        driver.update_prices();

        Ok(driver)
    }

    /// Iterate until a terminal state is reached.
    pub fn run(&mut self, observer: &mut impl Observer<F>) -> OptimizationResult<F> {
        loop {
            if let Some(result) = self.step(observer) {
                break result;
            }
        }
    }

    /// Execute a single iteration.
    ///
    /// Should not be called anymore after a terminal state was returned.
    ///
    /// # Return value
    ///
    /// `None` if the iteration ended with a basis change, a terminal state otherwise.
    pub fn step(&mut self, observer: &mut impl Observer<F>) -> Option<OptimizationResult<F>> {
        debug_assert!(!self.terminated);
        debug_assert!(self.state.is_partition());

        let limit = self.config.limit(Limit::Iterations);
        if self.iteration > limit {
            warn!("Max number of iterations reached ({}), no optimal solution found", limit);
            self.terminated = true;
            return Some(OptimizationResult::Exhausted { iterations: limit });
        }

        let mut record = self.begin_record();
        let mut phase = self.price(&mut record);
        let outcome = loop {
            phase = match phase {
                Phase::Pricing => break None,
                Phase::RatioTest { position } => self.ratio_test(position, &mut record),
                Phase::Pivot { position, row, column } => self.pivot(position, row, column),
                Phase::Recompute { row, column, ratio } => self.recompute(row, &column, ratio),
                Phase::Terminal(result) => break Some(result),
            };
        };

        observer.observe(&record);
        match outcome {
            None => self.iteration += 1,
            Some(_) => self.terminated = true,
        }

        outcome
    }

    /// Select the entering variable.
    fn price(&mut self, record: &mut Iteration<F>) -> Phase<F> {
        match self.rule.select_primal_pivot_column(&self.cbar) {
            Some(position) => {
                let entering = self.state.nonbasis()[position];
                debug!("Iteration {}: {} enters with reduced cost {:?}", self.iteration, entering, self.cbar[position]);
                record.entering = Some(entering);

                Phase::RatioTest { position }
            },
            None => {
                let solution = self.solution();
                info!("Optimal value {:?} reached after {} iterations", solution.objective_value(), self.iteration - 1);

                Phase::Terminal(OptimizationResult::Optimal(solution))
            },
        }
    }

    /// Transform the entering column and select the leaving variable.
    fn ratio_test(&mut self, position: usize, record: &mut Iteration<F>) -> Phase<F> {
        let entering = self.state.nonbasis()[position];
        let column = self.transform(entering);

        let ratios = ratio_test::ratios(self.state.bbar(), &column);
        record.ratios = ratios.iter()
            .map(|&(row, ratio)| (self.state.basis()[row], ratio))
            .collect();
        record.column = Some(column.clone());

        match ratio_test::select_primal_pivot_row(&ratios) {
            Some(row) => {
                let leaving = self.state.basis()[row];
                debug!("Iteration {}: {} leaves from row {}", self.iteration, leaving, row);
                record.leaving = Some(leaving);
                record.pivot_row = Some(row);

                Phase::Pivot { position, row, column }
            },
            None => {
                info!("Problem is unbounded in the direction of {}", entering);

                Phase::Terminal(OptimizationResult::Unbounded { entering, direction: column })
            },
        }
    }

    /// Record the basis change in the eta file and exchange the variables.
    fn pivot(&mut self, position: usize, row: usize, column: Vec<F>) -> Phase<F> {
        let ratio = self.state.bbar()[row] / column[row];

        if let Err(error) = self.eta_file.append(column.clone(), row) {
            warn!("{}, no optimal solution found", error);
            return Phase::Terminal(OptimizationResult::Exhausted { iterations: error.capacity });
        }
        self.state.exchange(row, position);

        Phase::Recompute { row, column, ratio }
    }

    /// Update the basic values, the dual vector and the reduced costs.
    fn recompute(&mut self, row: usize, column: &[F], ratio: F) -> Phase<F> {
        let tolerance = self.config.tolerance();

        let bbar = self.state.bbar_mut();
        for (value, &xij) in bbar.iter_mut().zip(column) {
            *value = snap_to_zero(*value - ratio * xij, tolerance);
        }
        bbar[row] = ratio;

        if let Some(negative) = self.state.bbar().iter().position(|&value| value < F::zero()) {
            let variable = self.state.basis()[negative];
            warn!("Linear program is infeasible: {} is negative in row {}", variable, negative);
            return Phase::Terminal(OptimizationResult::Infeasible {
                row: negative,
                variable,
                bbar: self.state.bbar().to_vec(),
            });
        }

        self.update_prices();

        Phase::Pricing
    }

    /// Compute `y` with the eta file from the basic costs, and price all nonbasic columns.
    fn update_prices(&mut self) {
        let problem = self.state.problem();

        self.y = self.state.basic_costs();
        self.eta_file.reprice(&mut self.y);

        self.cbar = self.state.nonbasis().iter()
            .map(|&variable| problem.cost(variable) - inner_product(&self.y, problem.column(variable)))
            .collect();
    }

    /// Snapshot of the state at the start of an iteration, without any decisions.
    fn begin_record(&self) -> Iteration<F> {
        Iteration {
            number: self.iteration,
            nonbasis: self.state.nonbasis().to_vec(),
            basis: self.state.basis().to_vec(),
            bbar: self.state.bbar().to_vec(),
            y: self.y.clone(),
            cbar: self.cbar.clone(),
            entering: None,
            column: None,
            ratios: Vec::new(),
            leaving: None,
            pivot_row: None,
        }
    }

    /// Solution values of the current basis, with objective value `y b`.
    fn solution(&self) -> Solution<F> {
        let problem = self.state.problem();
        let tolerance = self.config.tolerance();

        let objective_value = inner_product(&self.y, problem.b());
        let values = problem.variables()
            .map(|variable| self.state.value(variable, tolerance))
            .collect();

        Solution::new(objective_value, values, problem.nr_original_variables())
    }

    /// Column of a variable with respect to the current basis.
    pub fn transform(&self, variable: VariableId) -> Vec<F> {
        let mut column = self.state.problem().column(variable).to_vec();
        self.eta_file.transform(&mut column);
        column
    }

    /// Number of the iteration that will be executed next.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Basic variables, by row.
    pub fn basis(&self) -> &[VariableId] {
        self.state.basis()
    }

    /// Nonbasic variables.
    pub fn nonbasis(&self) -> &[VariableId] {
        self.state.nonbasis()
    }

    /// Values of the basic variables.
    pub fn bbar(&self) -> &[F] {
        self.state.bbar()
    }

    /// Dual vector.
    pub fn dual(&self) -> &[F] {
        &self.y
    }

    /// Reduced costs, aligned with `nonbasis`.
    pub fn reduced_costs(&self) -> &[F] {
        &self.cbar
    }

    /// Basis changes made so far.
    pub fn eta_file(&self) -> &EtaFile<F> {
        &self.eta_file
    }

    /// Basis partition and basic values.
    pub fn state(&self) -> &ProblemState<'a, F> {
        &self.state
    }
}
