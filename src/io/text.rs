//! # Plain text input
//!
//! Whitespace separated tokens: the number of constraints `m` and variables `n`, the `n` objective
//! coefficients, and then for each constraint its `n` coefficients followed by the right-hand side.
//! For example, maximizing `3 x1 + 2 x2` subject to `x1 + x2 <= 4`:
//!
//! ```text
//! 1 2
//! 3 2
//! 1 1 4
//! ```
//!
//! Slack variables are added for each constraint; they shouldn't be part of the input.
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use log::warn;
use num_traits::Float;

use crate::algorithm::revised_simplex::config::Config;
use crate::algorithm::revised_simplex::state::SizeExceeded;
use crate::data::linear_program::standard_form::StandardForm;
use crate::io::error::{Import, ParseError};

/// Parse a problem.
///
/// The dimensions are checked against the `config` before any coefficient is read.
///
/// # Errors
///
/// If a token is missing or can't be parsed, if the problem is too large or if it is inconsistent.
pub fn parse<F: Float + FromStr>(program: &str, config: &Config<F>) -> Result<StandardForm<F>, Import> {
    read(program.as_bytes(), config)
}

/// Read a problem, line by line.
///
/// Reading stops at the line holding the last right-hand side. Anything after that line is left
/// in `source`, such that an interactive source doesn't need to be closed.
///
/// # Errors
///
/// If reading fails, if a token is missing or can't be parsed, if the problem is too large or if it
/// is inconsistent.
pub fn read<F: Float + FromStr>(source: impl BufRead, config: &Config<F>) -> Result<StandardForm<F>, Import> {
    let mut tokens = Tokens::new(source);

    let nr_constraints = tokens.next_value::<usize>("the number of constraints (m)")?;
    let nr_variables = tokens.next_value::<usize>("the number of variables (n)")?;
    SizeExceeded::check(nr_constraints, nr_variables, config)?;

    let costs = (0..nr_variables)
        .map(|j| tokens.next_value(&format!("objective coefficient {}", j + 1)))
        .collect::<Result<Vec<F>, _>>()
        .map_err(|error| with_context("Couldn't read the objective function", error))?;

    let mut rows = Vec::with_capacity(nr_constraints);
    let mut b = Vec::with_capacity(nr_constraints);
    for i in 0..nr_constraints {
        let (row, rhs) = read_constraint(&mut tokens, i, nr_variables)
            .map_err(|error| with_context(format!("Couldn't read constraint {}", i + 1), error))?;
        rows.push(row);
        b.push(rhs);
    }

    let remaining = tokens.remaining();
    if remaining > 0 {
        warn!("Ignoring {} tokens after the last constraint", remaining);
    }

    Ok(StandardForm::new(costs, rows, b)?)
}

/// Coefficients and right-hand side of constraint `i`.
fn read_constraint<F: FromStr, R: BufRead>(
    tokens: &mut Tokens<R>,
    i: usize,
    nr_variables: usize,
) -> Result<(Vec<F>, F), Import> {
    let row = (0..nr_variables)
        .map(|j| tokens.next_value(&format!("coefficient {} of constraint {}", j + 1, i + 1)))
        .collect::<Result<Vec<F>, _>>()?;
    let rhs = tokens.next_value(&format!("the right-hand side of constraint {}", i + 1))?;

    Ok((row, rhs))
}

/// Wrap a parse error in a description of what was being read. Other errors pass unchanged.
fn with_context(description: impl Into<String>, error: Import) -> Import {
    match error {
        Import::Parse(error) => Import::Parse(ParseError::with_cause(description, error)),
        other => other,
    }
}

/// Whitespace separated tokens, with their 1-based position for error messages.
///
/// A new line is only read from the source once all tokens of the previous line are used.
struct Tokens<R> {
    source: R,
    line: String,
    pending: VecDeque<String>,
    position: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(source: R) -> Self {
        Self {
            source,
            line: String::new(),
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Read the next token as a value.
    ///
    /// # Arguments
    ///
    /// * `what`: Description of the value, used in the error message.
    fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, Import> {
        match self.next_token()? {
            Some(token) => token.parse().map_err(|_| Import::Parse(ParseError::with_token_location(
                format!("Couldn't parse {}", what),
                (self.position, &token),
            ))),
            None => Err(Import::Parse(ParseError::new(format!("Unexpected end of input while reading {}", what)))),
        }
    }

    /// `None` at the end of the source.
    fn next_token(&mut self) -> Result<Option<String>, Import> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.position += 1;
                return Ok(Some(token));
            }

            self.line.clear();
            if self.source.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(self.line.split_whitespace().map(str::to_string));
        }
    }

    /// Tokens left on the last line that was read.
    fn remaining(&self) -> usize {
        self.pending.len()
    }
}
