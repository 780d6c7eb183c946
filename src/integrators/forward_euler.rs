//! Forward Euler integration method (explicit Euler)
//!
//! The simplest member of the family. It serves as the accuracy baseline
//! in comparison runs and as the conventional seeding step for the
//! leapfrog method's one-step history.

use super::{Integrator, Rhs};
use crate::math::Scalar;
use std::any::Any;

/// Advances `f` by one forward Euler step.
///
/// Solves `df/dt = rhs(t, f)` using the update rule:
///
/// ```text
/// f(t + dt) = f(t) + rhs(t, f(t)) * dt
/// ```
///
/// One derivative evaluation per step. Any finite input produces a finite
/// result; the method only fails where the derivative function itself is
/// undefined.
#[inline]
pub fn forward_euler<T, F>(rhs: F, f: T, t: T, dt: T) -> T
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    f + rhs(t, f) * dt
}

/// Advances every element of `f` by one forward Euler step.
///
/// Applies [`forward_euler`] independently per element: the derivative of
/// element `i` may depend only on that element's own value and the shared
/// time (a decoupled system).
pub fn forward_euler_each<T, F>(rhs: F, f: &mut [T], t: T, dt: T)
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    for fi in f.iter_mut() {
        *fi = forward_euler(&rhs, *fi, t, dt);
    }
}

/// Forward Euler integrator (explicit Euler method)
///
/// The simplest possible one-step method, advancing the state along the
/// derivative evaluated at the current point. Computationally minimal,
/// but the error accumulated over a trajectory shrinks only linearly with
/// the step size, so it needs a small `dt` for acceptable accuracy.
///
/// # Algorithm
///
/// ```text
/// f(t+dt) = f(t) + rhs(t, f(t)) * dt
/// ```
///
/// # Mathematical Properties
///
/// - **Order of accuracy**: O(dt) global error
/// - **Derivative evaluations**: 1 per step
/// - **Stability**: conditionally stable (small stability region)
/// - **Extra state**: none
///
/// # Comparison with Other Methods
///
/// | Property         | Forward Euler | Leapfrog | RK2 Midpoint | RK4 |
/// |------------------|---------------|----------|--------------|-----|
/// | Order            | 1             | 2        | 2            | 4   |
/// | Derivative evals | 1             | 1        | 2            | 4   |
/// | Extra state      | none          | f_prev   | none         | none |
///
/// # Use Cases
///
/// **Ideal for:**
/// - Baselines in accuracy and timing comparisons
/// - Seeding the leapfrog history
/// - Problems where per-step cost dominates and accuracy is secondary
///
/// **Consider alternatives:**
/// - Use RK2 or RK4 when accuracy at a given `dt` matters
/// - Use leapfrog for long runs of oscillatory problems
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl<T: Scalar> Integrator<T> for ForwardEuler {
    fn step(&self, rhs: &dyn Rhs<T>, f: T, t: T, dt: T) -> T {
        forward_euler(|t, f| rhs.eval(t, f), f, t, dt)
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "forward_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["euler", "explicit_euler"]
    }

    fn clone_box(&self) -> Box<dyn Integrator<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
