//! Explicit one-step integrators for scalar ordinary differential equations
//!
//! Each method lives in its own module as a pair of pure free functions
//! (scalar and batched) plus a zero-sized type implementing [`Integrator`]
//! for dynamic selection through the [`registry`].
//!
//! Every method takes the right-hand side as `rhs(t, f)`, time first and
//! state second, following the `df/dt = f(t, y)` convention.

use crate::math::Scalar;
use std::any::Any;

pub mod forward_euler;
pub mod leapfrog;
pub mod registry;
pub mod rk2;
pub mod rk4;

pub use forward_euler::ForwardEuler;
pub use leapfrog::Leapfrog;
pub use rk2::RungeKuttaSecondOrderMidpoint;
pub use rk4::RungeKuttaFourthOrder;

/// Right-hand side of a scalar ODE `df/dt = rhs(t, f)`.
///
/// Blanket-implemented for any `Fn(T, T) -> T` closure or function
/// pointer, so plain closures can cross the `dyn` boundary of the
/// [`Integrator`] trait. The function must be referentially transparent:
/// the multi-stage methods evaluate it several times per step and assume
/// every evaluation at the same point yields the same value.
pub trait Rhs<T: Scalar>: Sync {
    /// Evaluate the derivative at time `t` and state `f`.
    fn eval(&self, t: T, f: T) -> T;
}

impl<T, F> Rhs<T> for F
where
    T: Scalar,
    F: Fn(T, T) -> T + Sync,
{
    fn eval(&self, t: T, f: T) -> T {
        self(t, f)
    }
}

/// Base trait for all integrators
///
/// All implementations are pure and stateless: a step reads its inputs,
/// performs arithmetic, and returns a result, with no shared mutable
/// state. Calls are safe to issue from independent threads on disjoint
/// state.
pub trait Integrator<T: Scalar>: Send + Sync {
    /// Advance a single state value by one time step
    ///
    /// # Arguments
    /// * `rhs` - Derivative function of the ODE
    /// * `f` - Current state value
    /// * `t` - Current time
    /// * `dt` - Time step
    fn step(&self, rhs: &dyn Rhs<T>, f: T, t: T, dt: T) -> T;

    /// Advance every element of a state slice by one time step
    ///
    /// Applies [`step`](Integrator::step) independently per element, so
    /// the derivative of element `i` may depend only on that element's
    /// own value and the shared time (a decoupled system). Coupled
    /// systems, where one derivative needs the whole state vector, do not
    /// fit this contract.
    fn step_each(&self, rhs: &dyn Rhs<T>, f: &mut [T], t: T, dt: T) {
        for fi in f.iter_mut() {
            *fi = self.step(rhs, *fi, t, dt);
        }
    }

    /// Get the convergence order of this integrator
    fn convergence_order(&self) -> usize;

    /// Get the canonical name of this integrator
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Clone into a new boxed instance
    fn clone_box(&self) -> Box<dyn Integrator<T>>;

    /// Get self as Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Extended trait for integrators that need the state one step back
///
/// Two-level methods implement the base [`Integrator`] trait with a
/// single-level fallback (one forward-Euler step) for use when no
/// previous value exists yet. Callers that track history call
/// [`step_with_previous`](TwoLevelIntegrator::step_with_previous)
/// instead. Seeding the previous value is the caller's responsibility;
/// nothing here bootstraps it.
pub trait TwoLevelIntegrator<T: Scalar>: Integrator<T> {
    /// Advance a single state value using the current and previous values
    ///
    /// # Arguments
    /// * `rhs` - Derivative function of the ODE
    /// * `f` - Current state value
    /// * `f_prev` - State value one step behind `f`
    /// * `t` - Current time
    /// * `dt` - Time step
    fn step_with_previous(&self, rhs: &dyn Rhs<T>, f: T, f_prev: T, t: T, dt: T) -> T;

    /// Advance every element of a state slice using per-element history
    ///
    /// Pairs `f[i]` with `f_prev[i]`; both slices must have equal length.
    /// `f_prev` is left untouched, so rotating the history forward stays
    /// with the caller.
    fn step_each_with_previous(&self, rhs: &dyn Rhs<T>, f: &mut [T], f_prev: &[T], t: T, dt: T) {
        debug_assert_eq!(
            f.len(),
            f_prev.len(),
            "state and previous-state slices must have equal length"
        );
        for (fi, &prev) in f.iter_mut().zip(f_prev) {
            *fi = self.step_with_previous(rhs, *fi, prev, t, dt);
        }
    }
}
