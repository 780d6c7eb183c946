//! Odestep prelude module
//!
//! This module re-exports the most commonly used types, traits, and
//! functions across the crate to reduce import boilerplate.

// External crate re-exports
pub use num_traits::Float;

// Internal re-exports - Math
pub use crate::math::{Scalar, one_half, one_sixth, two};

// Internal re-exports - Config
pub use crate::config::RunConfig;

// Internal re-exports - Integrators
pub use crate::integrators::{
    ForwardEuler, Integrator, Leapfrog, Rhs, RungeKuttaFourthOrder,
    RungeKuttaSecondOrderMidpoint, TwoLevelIntegrator,
    forward_euler::{forward_euler, forward_euler_each},
    leapfrog::{leapfrog, leapfrog_each},
    registry::IntegratorRegistry,
    rk2::{rk2, rk2_each},
    rk4::{rk4, rk4_each},
};
