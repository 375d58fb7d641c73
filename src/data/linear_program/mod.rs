//! # Representing linear programs
//!
//! Linear programs are given in standard form. The solution type is used to report the result of
//! a solve.
pub mod elements;
pub mod solution;
pub mod standard_form;
