//! # Pricing and ratio test
//!
//! Every iteration makes two decisions: which variable enters the basis (a pivot rule) and which
//! variable leaves it (the minimum ratio test).
pub mod pivot_rule;
