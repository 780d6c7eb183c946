//! Odestep comparison driver
//!
//! Integrates the test problem `df/dt = cos(t)`, `f(0) = 0`, whose exact
//! solution is `sin(t)`, with the selected method. Reports loop timing
//! and a per-step comparison table against the closed-form solution.

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use odestep::cli::{self, Args};
use odestep::config::RunConfig;
use odestep::integrators::registry::IntegratorRegistry;
use odestep::integrators::{Integrator, Leapfrog, TwoLevelIntegrator};

/// Initial value of the test problem.
const INIT_F: f64 = 0.0;

/// Right-hand side of the test problem.
fn rhs(t: f64, _f: f64) -> f64 {
    t.cos()
}

/// Closed-form solution of the test problem.
fn solution(t: f64) -> f64 {
    t.sin()
}

/// Relative error in percent against the closed-form solution.
///
/// The denominator is clamped to keep the value printable where the
/// solution passes through zero.
fn relative_error_percent(calculated: f64, actual: f64) -> f64 {
    (calculated - actual).abs() / actual.abs().max(1e-10) * 100.0
}

/// Stepping state for the test problem, tracking the one-step history
/// leapfrog needs.
struct Trajectory<'a> {
    integrator: &'a dyn Integrator<f64>,
    leapfrog: Option<&'a Leapfrog>,
    t: f64,
    f: f64,
    f_prev: f64,
    taken: usize,
}

impl<'a> Trajectory<'a> {
    fn new(integrator: &'a dyn Integrator<f64>) -> Self {
        Self {
            integrator,
            leapfrog: integrator.as_any().downcast_ref::<Leapfrog>(),
            t: 0.0,
            f: INIT_F,
            f_prev: INIT_F,
            taken: 0,
        }
    }

    /// Take one step.
    ///
    /// The first leapfrog step is the forward Euler seed from its
    /// single-level fallback; every later one uses the two-level update.
    fn advance(&mut self, dt: f64) {
        let next = match self.leapfrog {
            Some(lf) if self.taken > 0 => {
                lf.step_with_previous(&rhs, self.f, self.f_prev, self.t, dt)
            }
            _ => self.integrator.step(&rhs, self.f, self.t, dt),
        };
        self.f_prev = self.f;
        self.f = next;
        self.t += dt;
        self.taken += 1;
    }
}

fn print_table_row(t: f64, f: f64) {
    let actual = solution(t);
    let error = relative_error_percent(f, actual);
    println!("{t:.8e}, {actual:.8e}, {f:.8e}, {error:.8e}");
}

fn run(config: &RunConfig, integrator: &dyn Integrator<f64>, print_table: bool) {
    let RunConfig { steps, dt, .. } = *config;

    // Timed pass, nothing printed inside the loop
    let mut trajectory = Trajectory::new(integrator);
    let start = Instant::now();
    for _ in 0..steps {
        trajectory.advance(dt);
    }
    let elapsed = start.elapsed();

    println!("integrator: {}", integrator.name());
    println!("loop time: {elapsed:?}");
    if steps > 0 {
        println!("iteration time: {:?}", elapsed / steps as u32);
    }
    println!("final value: {}", trajectory.f);
    println!();

    if !print_table {
        return;
    }

    // Comparison pass against the closed-form solution
    let mut trajectory = Trajectory::new(integrator);
    println!("t, actual, calculated, error(%)");
    print_table_row(trajectory.t, trajectory.f);
    for _ in 0..steps {
        trajectory.advance(dt);
        print_table_row(trajectory.t, trajectory.f);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.list_integrators {
        cli::handle_list_integrators();
        return ExitCode::SUCCESS;
    }

    let config = match cli::load_and_apply_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let registry = IntegratorRegistry::<f64>::new().with_standard_integrators();
    let integrator = match registry.create(&config.integrator) {
        Ok(integrator) => integrator,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    run(&config, integrator.as_ref(), !args.no_table);
    ExitCode::SUCCESS
}
