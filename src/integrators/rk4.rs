//! Fourth-order Runge-Kutta integration method
//!
//! The standard high-accuracy explicit workhorse of the family.

use super::{Integrator, Rhs};
use crate::math::{Scalar, one_half, one_sixth, two};
use std::any::Any;

/// Advances `f` by one classic fourth-order Runge-Kutta step.
///
/// Solves `df/dt = rhs(t, f)` using the update rule:
///
/// ```text
/// k1 = rhs(t,        f)
/// k2 = rhs(t + dt/2, f + dt/2 * k1)
/// k3 = rhs(t + dt/2, f + dt/2 * k2)
/// k4 = rhs(t + dt,   f + dt * k3)
/// f(t + dt) = f(t) + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
/// ```
///
/// Four derivative evaluations per step; fourth-order accurate (global
/// error proportional to dt⁴). Needs no state beyond the current value.
#[inline]
pub fn rk4<T, F>(rhs: F, f: T, t: T, dt: T) -> T
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let half_dt = one_half::<T>() * dt;

    // Stage 1: slope at the current point
    let k1 = rhs(t, f);

    // Stage 2: slope at the midpoint reached along k1
    let k2 = rhs(t + half_dt, f + half_dt * k1);

    // Stage 3: slope at the midpoint reached along k2
    let k3 = rhs(t + half_dt, f + half_dt * k2);

    // Stage 4: slope at the endpoint reached along k3
    let k4 = rhs(t + dt, f + dt * k3);

    f + one_sixth::<T>() * dt * (k1 + two::<T>() * k2 + two::<T>() * k3 + k4)
}

/// Advances every element of `f` by one fourth-order Runge-Kutta step.
///
/// Applies [`rk4`] independently per element: the derivative of element
/// `i` may depend only on that element's own value and the shared time
/// (a decoupled system).
pub fn rk4_each<T, F>(rhs: F, f: &mut [T], t: T, dt: T)
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    for fi in f.iter_mut() {
        *fi = rk4(&rhs, *fi, t, dt);
    }
}

/// Fourth-order Runge-Kutta integrator (RK4)
///
/// A four-stage method that combines slopes from the step's start,
/// midpoint, and end with the classic 1-2-2-1 weighting.
///
/// # Mathematical Properties
///
/// - **Order of accuracy**: O(dt⁴) global error
/// - **Derivative evaluations**: 4 per step
/// - **Extra state**: none
///
/// # Use Cases
///
/// **Ideal for:**
/// - High accuracy at moderate step sizes
/// - Reference trajectories for judging the cheaper methods
///
/// **Consider alternatives:**
/// - Use forward Euler or RK2 when derivative evaluations are expensive
///   and accuracy demands are loose
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaFourthOrder;

impl<T: Scalar> Integrator<T> for RungeKuttaFourthOrder {
    fn step(&self, rhs: &dyn Rhs<T>, f: T, t: T, dt: T) -> T {
        rk4(|t, f| rhs.eval(t, f), f, t, dt)
    }

    fn convergence_order(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "runge_kutta_fourth_order"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["rk4"]
    }

    fn clone_box(&self) -> Box<dyn Integrator<T>> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_derivative_matches_euler() {
        // All four stages see the same slope, so the weighted sum
        // collapses to a plain Euler step.
        let next = rk4(|_t, _f: f64| 3.0, 1.0, 0.0, 0.1);
        assert!((next - 1.3).abs() < 1e-15);
    }

    #[test]
    fn test_cubic_integrand_is_exact() {
        // df/dt = t³ integrates to t⁴/4; RK4 reproduces polynomials up to
        // degree three exactly (Simpson weighting).
        let dt = 0.5;
        let next = rk4(|t: f64, _f: f64| t * t * t, 0.0, 0.0, dt);
        assert!((next - dt.powi(4) / 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_derivative_leaves_state_unchanged() {
        let mut f = 7.0;
        for _ in 0..100 {
            f = rk4(|_t, _f| 0.0, f, 0.0, 0.125);
        }
        assert_eq!(f, 7.0);
    }

    #[test]
    fn test_exponential_decay_single_step() {
        // One step of df/dt = -2f from f = 1 matches the degree-four
        // Taylor expansion of exp(-2 dt).
        let dt = 0.1f64;
        let lambda = -2.0;
        let next = rk4(|_t, f| lambda * f, 1.0, 0.0, dt);

        let x = lambda * dt;
        let taylor = 1.0 + x + x * x / 2.0 + x * x * x / 6.0 + x * x * x * x / 24.0;
        assert!((next - taylor).abs() < 1e-15);
    }

    #[test]
    fn test_batched_matches_scalar() {
        let rhs = |t: f64, f: f64| t - 2.0 * f;
        let initial = [0.5, 1.0, -3.0];

        let mut batch = initial;
        rk4_each(rhs, &mut batch, 0.2, 0.01);

        for (stepped, &f0) in batch.iter().zip(&initial) {
            assert_eq!(*stepped, rk4(rhs, f0, 0.2, 0.01));
        }
    }

    #[test]
    fn test_trait_step_matches_free_function() {
        let integrator = RungeKuttaFourthOrder;
        let rhs = |t: f64, f: f64| t.cos() - 0.5 * f;

        let via_trait = integrator.step(&rhs, 0.25f64, 0.3, 0.01);
        assert_eq!(via_trait, rk4(rhs, 0.25, 0.3, 0.01));
    }
}
