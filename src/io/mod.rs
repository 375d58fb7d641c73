//! # Reading and writing of linear programs
//!
//! Problems are read from a plain text format, see the `text` module. The `report` module renders
//! problems, iterations and results for the user.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::info;
use num_traits::Float;

use crate::algorithm::revised_simplex::config::Config;
use crate::data::linear_program::standard_form::StandardForm;
use crate::io::error::Import;

pub mod error;
pub mod report;
pub mod text;

/// Import a problem from a file.
///
/// # Errors
///
/// When a file cannot be found or read, when its contents can't be parsed or when the problem is
/// too large or inconsistent.
pub fn import<F: Float + FromStr>(file_path: &Path, config: &Config<F>) -> Result<StandardForm<F>, Import> {
    info!("Reading problem file: \"{}\"", file_path.to_string_lossy());

    let file = File::open(file_path)?;
    read(BufReader::new(file), config)
}

/// Read a problem from any source, such as standard input.
///
/// Only the lines up to the last right-hand side are consumed; see `text::read`.
///
/// # Errors
///
/// When reading fails, or when the contents can't be parsed or describe a problem that is too
/// large or inconsistent.
pub fn read<F: Float + FromStr>(source: impl BufRead, config: &Config<F>) -> Result<StandardForm<F>, Import> {
    text::read(source, config)
}
