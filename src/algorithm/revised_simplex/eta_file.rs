//! # Product form of the inverse
//!
//! The basis inverse is never stored explicitly. Starting from the slack basis, which is the
//! identity, every basis change is recorded as an elementary "eta" matrix that equals the identity
//! except for a single column. The basis inverse is the product of these matrices, with the most
//! recent one on the left.
use std::error::Error;
use std::fmt;

use log::trace;
use num_traits::Float;

/// A single elementary matrix.
///
/// Differs from the identity matrix only in column `pivot`, which holds `column`: the entering
/// column expressed in the basis as it was just before the pivot.
#[derive(Clone, Debug, PartialEq)]
struct Eta<F> {
    column: Vec<F>,
    pivot: usize,
}

/// Bounded, append-only sequence of eta vectors.
///
/// Capacity is fixed at creation. The file is never truncated; a new problem needs a new file.
#[derive(Clone, Debug, PartialEq)]
pub struct EtaFile<F> {
    etas: Vec<Eta<F>>,
    capacity: usize,
    /// Dimension `m` of the basis.
    len: usize,
}

impl<F: Float> EtaFile<F> {
    /// Create an empty file, representing the identity matrix.
    ///
    /// # Arguments
    ///
    /// * `len`: Dimension of the basis, the number of constraints.
    /// * `capacity`: Maximum number of eta vectors that can be appended. Nothing is allocated for
    /// it up front.
    pub fn new(len: usize, capacity: usize) -> Self {
        Self {
            etas: Vec::new(),
            capacity,
            len,
        }
    }

    /// Express a column of the original problem in terms of the current basis (FTRAN).
    ///
    /// Applies the eta vectors in the order in which they were appended. Each application is a
    /// single step of Gaussian elimination on the pivot row of that eta vector.
    ///
    /// # Arguments
    ///
    /// * `column`: Original column of length `m`, transformed in place.
    pub fn transform(&self, column: &mut [F]) {
        debug_assert_eq!(column.len(), self.len);

        for eta in &self.etas {
            let p = eta.pivot;
            column[p] = column[p] / eta.column[p];
            let pivot_value = column[p];
            for (i, value) in column.iter_mut().enumerate() {
                if i != p {
                    *value = *value - eta.column[i] * pivot_value;
                }
            }
        }
    }

    /// Compute the dual vector `y = c_B B^-1` from the basic costs (BTRAN).
    ///
    /// Applies the eta vectors in reverse order.
    ///
    /// # Arguments
    ///
    /// * `costs`: Cost of the basic variable of each row, overwritten with `y`.
    pub fn reprice(&self, costs: &mut [F]) {
        debug_assert_eq!(costs.len(), self.len);

        for eta in self.etas.iter().rev() {
            let p = eta.pivot;
            let difference = costs.iter()
                .enumerate()
                .filter(|&(i, _)| i != p)
                .fold(F::zero(), |total, (i, &y)| total + eta.column[i] * y);
            costs[p] = (costs[p] - difference) / eta.column[p];
        }
    }

    /// Record a basis change.
    ///
    /// # Arguments
    ///
    /// * `column`: The entering column, already transformed with `transform`.
    /// * `pivot`: Row of the leaving variable. The column should be nonzero there.
    ///
    /// # Errors
    ///
    /// If the file is full.
    pub fn append(&mut self, column: Vec<F>, pivot: usize) -> Result<(), IterationLimitExceeded> {
        debug_assert_eq!(column.len(), self.len);
        debug_assert!(pivot < self.len);
        debug_assert!(column[pivot] != F::zero());

        if self.etas.len() >= self.capacity {
            return Err(IterationLimitExceeded { capacity: self.capacity });
        }

        trace!("Appending eta vector {} with pivot row {}", self.etas.len() + 1, pivot);
        self.etas.push(Eta { column, pivot });
        Ok(())
    }

    /// Number of eta vectors in the file.
    pub fn len(&self) -> usize {
        self.etas.len()
    }

    /// Whether the file still represents the identity.
    pub fn is_empty(&self) -> bool {
        self.etas.is_empty()
    }

    /// Maximum number of eta vectors.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Dimension of the basis.
    pub fn dimension(&self) -> usize {
        self.len
    }

    /// (pivot row, column) of every eta vector, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item=(usize, &[F])> {
        self.etas.iter().map(|eta| (eta.pivot, eta.column.as_slice()))
    }
}

/// The eta file is full, so no more basis changes can be made.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IterationLimitExceeded {
    /// Number of eta vectors that the file could hold.
    pub capacity: usize,
}

impl fmt::Display for IterationLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Max number of iterations reached ({})", self.capacity)
    }
}

impl Error for IterationLimitExceeded {}
