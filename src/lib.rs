//! Odestep library
//!
//! Explicit one-step integrators for ordinary differential equations:
//! forward Euler, leapfrog, and second- and fourth-order Runge-Kutta.
//! Each method exists as a pure scalar stepper, a batched element-wise
//! stepper, and a dynamically selectable [`integrators::Integrator`]
//! implementation managed through a name registry.
//!
//! ```
//! use odestep::prelude::*;
//!
//! // df/dt = cos(t), f(0) = 0, exact solution sin(t)
//! let rhs = |t: f64, _f: f64| t.cos();
//! let dt = 0.01;
//! let mut f = 0.0;
//! let mut t = 0.0;
//! for _ in 0..100 {
//!     f = forward_euler(rhs, f, t, dt);
//!     t += dt;
//! }
//! assert!((f - 1.0f64.sin()).abs() < 0.01);
//! ```

pub mod cli;
pub mod config;
pub mod integrators;
pub mod math;
pub mod prelude;
