//! Leapfrog integration method (two-level midpoint)
//!
//! The only method in the family that needs state beyond the current
//! value: the caller tracks the state one step behind and supplies it on
//! every call. Seeding that history is external; a genuine simulation
//! takes its first step with a different one-step method (typically
//! forward Euler) before the first leapfrog step.

use super::forward_euler::forward_euler;
use super::{Integrator, Rhs, TwoLevelIntegrator};
use crate::math::{Scalar, two};
use std::any::Any;

/// Advances `f` by one leapfrog step.
///
/// Solves `df/dt = rhs(t, f)` using the update rule:
///
/// ```text
/// f(t + dt) = f(t - dt) + 2 * dt * rhs(t, f(t))
/// ```
///
/// One derivative evaluation per step; second-order accurate for systems
/// without odd-derivative growth. `f_prev` is never initialized here: a
/// badly seeded history excites a spurious oscillating mode that the
/// stepper neither detects nor damps.
#[inline]
pub fn leapfrog<T, F>(rhs: F, f: T, f_prev: T, t: T, dt: T) -> T
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    f_prev + two::<T>() * dt * rhs(t, f)
}

/// Advances every element of `f` by one leapfrog step.
///
/// Applies [`leapfrog`] independently per element, pairing `f[i]` with
/// `f_prev[i]`. Both slices must have equal length. `f_prev` is left
/// untouched; rotating the history forward is the caller's job.
pub fn leapfrog_each<T, F>(rhs: F, f: &mut [T], f_prev: &[T], t: T, dt: T)
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    debug_assert_eq!(
        f.len(),
        f_prev.len(),
        "state and previous-state slices must have equal length"
    );
    for (fi, &prev) in f.iter_mut().zip(f_prev) {
        *fi = leapfrog(&rhs, *fi, prev, t, dt);
    }
}

/// Leapfrog integrator (two-level midpoint method)
///
/// Reaches second-order accuracy with a single derivative evaluation per
/// step by centering the update on the current point: the step runs from
/// the previous state across twice the step size.
///
/// # Algorithm
///
/// ```text
/// f(t+dt) = f(t-dt) + 2 * dt * rhs(t, f(t))
/// ```
///
/// # Mathematical Properties
///
/// - **Order of accuracy**: O(dt²) global error
/// - **Derivative evaluations**: 1 per step
/// - **Extra state**: the value one step behind the current one
/// - **Failure mode**: an inconsistent seed splits the trajectory into
///   two weakly coupled chains, visible as a step-to-step oscillation
///   around the true solution
///
/// # Seeding
///
/// The previous value must be produced externally before the first
/// two-level step. Through the dynamic [`Integrator`] interface, the
/// single-level [`step`](Integrator::step) is a forward-Euler fallback
/// that doubles as that seed; steady-state integration then goes through
/// [`step_with_previous`](TwoLevelIntegrator::step_with_previous).
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl<T: Scalar> Integrator<T> for Leapfrog {
    /// Single-level fallback: one forward Euler step.
    ///
    /// Used when no previous value exists yet, which makes it the
    /// conventional seeding step for the two-level update.
    fn step(&self, rhs: &dyn Rhs<T>, f: T, t: T, dt: T) -> T {
        forward_euler(|t, f| rhs.eval(t, f), f, t, dt)
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "leapfrog"
    }

    fn clone_box(&self) -> Box<dyn Integrator<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Scalar> TwoLevelIntegrator<T> for Leapfrog {
    fn step_with_previous(&self, rhs: &dyn Rhs<T>, f: T, f_prev: T, t: T, dt: T) -> T {
        leapfrog(|t, f| rhs.eval(t, f), f, f_prev, t, dt)
    }
}
