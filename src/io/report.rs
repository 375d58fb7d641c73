//! # Human readable output
//!
//! Renders the problem, the per-iteration snapshots and the final result as plain text. The solver
//! itself never prints.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::io;
use std::io::Write;

use itertools::Itertools;
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::revised_simplex::{Iteration, Observer};
use crate::data::linear_program::standard_form::StandardForm;

/// Displays the problem data, including the slack columns.
pub struct Problem<'a, F>(pub &'a StandardForm<F>);

impl<F: Float + Display> Display for Problem<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let problem = self.0;

        writeln!(f, "m = {}\tn = {}", problem.nr_constraints(), problem.nr_original_variables())?;
        writeln!(f, "c = {}", problem.costs().iter().join("\t"))?;
        writeln!(f, "b = {}", problem.b().iter().join("\t"))?;
        writeln!(f, "A =")?;
        for i in 0..problem.nr_constraints() {
            writeln!(f, "{}", problem.variables().map(|variable| problem.coefficient(i, variable)).join("\t"))?;
        }

        Ok(())
    }
}

impl<F: Display> Display for Iteration<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "--- iteration {} ---", self.number)?;
        writeln!(f, "N = {{ {} }}\tB = {{ {} }}", self.nonbasis.iter().join(" "), self.basis.iter().join(" "))?;
        writeln!(f, "bbar =\t{}", self.bbar.iter().join("\t"))?;
        writeln!(f, "y =\t{}", self.y.iter().join("\t"))?;
        writeln!(f, "cbar\t{}", self.nonbasis.iter()
            .zip(&self.cbar)
            .map(|(variable, cost)| format!("{} {}", variable, cost))
            .join("\t"),
        )?;

        if let Some(entering) = self.entering {
            writeln!(f, "Entering variable is {}", entering)?;
        }
        if let Some(column) = &self.column {
            writeln!(f, "abarj =\t{}", column.iter().join("\t"))?;
            writeln!(f, "ratio\t{}", self.ratios.iter()
                .map(|(variable, ratio)| format!("{} {}", variable, ratio))
                .join("\t"),
            )?;
        }
        if let (Some(leaving), Some(row), Some(column)) = (self.leaving, self.pivot_row, &self.column) {
            writeln!(f, "Leaving variable is {}", leaving)?;
            writeln!(f, "E{} = column {}:\t{}", self.number, row + 1, column.iter().join("\t"))?;
        }

        Ok(())
    }
}

impl<F: Float + Display> Display for OptimizationResult<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            OptimizationResult::Optimal(solution) => {
                writeln!(f, "Optimal value of {} has been reached.", solution.objective_value())?;
                writeln!(f, "Original:\t{}", solution.original()
                    .map(|(variable, value)| format!("{}={}", variable, value))
                    .join("\t"),
                )?;
                writeln!(f, "Slack:\t\t{}", solution.slack()
                    .map(|(variable, value)| format!("{}={}", variable, value))
                    .join("\t"),
                )
            },
            OptimizationResult::Unbounded { entering, .. } => {
                writeln!(f, "Solution is unbounded in the direction of {}", entering)
            },
            OptimizationResult::Infeasible { variable, bbar, .. } => {
                writeln!(f, "The linear program is infeasible: {} would become negative", variable)?;
                writeln!(f, "bbar: {}", bbar.iter().join("\t"))
            },
            OptimizationResult::Exhausted { iterations } => {
                writeln!(f, "Max number of iterations reached ({})", iterations)?;
                writeln!(f, "No optimal solution found")
            },
        }
    }
}

/// Writes every iteration to an output stream as soon as it is observed.
///
/// Writing stops at the first error, which is kept and returned by `finish`.
pub struct Printer<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W> {
    /// Print to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Stop printing.
    ///
    /// # Errors
    ///
    /// The first error encountered while writing an iteration.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.out),
        }
    }
}

impl<F: Display, W: Write> Observer<F> for Printer<W> {
    fn observe(&mut self, iteration: &Iteration<F>) {
        if self.error.is_none() {
            if let Err(error) = writeln!(self.out, "{}", iteration) {
                self.error = Some(error);
            }
        }
    }
}
