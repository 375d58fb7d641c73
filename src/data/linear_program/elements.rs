//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Identifies a variable of a standard form linear program.
///
/// Variables are numbered from `1` through `m + n` for the user: the original decision variables
/// come first (`x1` through `xn`), followed by one slack variable per constraint. Storage is
/// 0-based; this type is the only place where the two numberings are converted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VariableId(usize);

impl VariableId {
    /// Create an id from the 1-based number that is shown to the user.
    ///
    /// # Arguments
    ///
    /// * `number`: Variable number, at least `1`.
    ///
    /// # Return value
    ///
    /// `None` if `number` is zero.
    pub fn new(number: usize) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(Self(number))
        }
    }

    /// Create an id from a 0-based storage index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// 0-based position of this variable in the column and cost storage.
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// 1-based variable number, as shown to the user.
    pub fn number(self) -> usize {
        self.0
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "x{}", self.0)
    }
}
