//! # Linear algebra primitives
//!
//! Problems are small and dense; vectors are plain slices of a float type.
use num_traits::Float;

/// Inner product of two vectors of equal length.
pub fn inner_product<F: Float>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).fold(F::zero(), |total, (&l, &r)| total + l * r)
}

/// Replace values that are closer to zero than `tolerance` by zero.
pub fn snap_to_zero<F: Float>(value: F, tolerance: F) -> F {
    if value.abs() < tolerance {
        F::zero()
    } else {
        value
    }
}
