//! Scalar abstraction and numeric constants for the integrators
//!
//! Every stepper in this crate is generic over the floating-point
//! precision. The constants below are materialized per call from
//! `T::one()` arithmetic (exact in binary floating point); nothing in the
//! crate caches coefficients per type.

use num_traits::Float;
use std::fmt::Debug;

/// Scalar type for integrator arithmetic.
///
/// Blanket-implemented for any floating-point type, so the steppers work
/// with `f32` and `f64` alike.
pub trait Scalar: Float + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + Debug + Send + Sync + 'static {}

/// Type-correct 2 for the chosen precision.
#[inline]
pub fn two<T: Scalar>() -> T {
    T::one() + T::one()
}

/// Type-correct 1/2 for the chosen precision.
#[inline]
pub fn one_half<T: Scalar>() -> T {
    T::one() / two()
}

/// Type-correct 1/6 for the chosen precision.
#[inline]
pub fn one_sixth<T: Scalar>() -> T {
    let six = two::<T>() * (T::one() + two());
    T::one() / six
}
