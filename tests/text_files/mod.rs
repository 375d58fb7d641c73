//! # Small problems in the plain text format
//!
//! Each file holds a single problem; the expected outcomes are computed by hand.
use std::path::{Path, PathBuf};

use revised_simplex::algorithm::revised_simplex::config::Config;
use revised_simplex::data::linear_program::standard_form::StandardForm;
use revised_simplex::io::import;

/// # Loading, solving and reporting
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}

fn load(name: &str) -> StandardForm<f64> {
    import(&get_test_file_path(name), &Config::default()).unwrap()
}
