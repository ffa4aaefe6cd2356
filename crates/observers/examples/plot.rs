//! Interactive Newmark-β response chart.
//!
//! Integrates a damped oscillator from its initial conditions and opens a
//! window plotting displacement, velocity, and acceleration against time.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- damping=0 time_step=0.05
//! RUST_LOG=debug cargo run --example plot --features plot -- beta=0 gamma=0.5
//! ```
//!
//! Every field of `Parameters` can be overridden with `name=value`. Unset
//! fields keep their defaults: m=1 kg, k=100 N/m, c=2 N·s/m, x₀=1 m, v₀=0,
//! Δt=0.01 s, T=10 s, β=0.25, γ=0.5.

use std::error::Error;

use newmark_core::Observer;
use newmark_observers::{DivergenceGuard, ResponsePlot, ShowConfig};
use newmark_solvers::transient::newmark::{self, Parameters, Status};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut params = Parameters::default();
    for arg in std::env::args().skip(1) {
        if let Err(message) = apply(&mut params, &arg) {
            eprintln!("{message}");
            eprintln!("Usage: plot [name=value ...]");
            std::process::exit(1);
        }
    }

    let steps = params.step_count()?;
    let oscillator = params.oscillator()?;

    let mut plot = ResponsePlot::new();
    let mut guard = DivergenceGuard::new(1e12);

    let solution = newmark::solve(
        &oscillator,
        params.scheme(),
        params.initial_state(),
        params.time_step,
        steps,
        |event: &newmark::Event| -> Option<newmark::Action> {
            plot.record(event.sample);
            guard.observe(event)
        },
    )?;

    if solution.status == Status::StoppedByObserver {
        eprintln!(
            "Response diverged at t={:.3} s; showing the run up to that point.",
            guard.tripped_at().unwrap_or_default()
        );
    }

    plot.show(
        ShowConfig::new()
            .title(format!(
                "Newmark-β (β={}, γ={}): ω₀={:.3} rad/s, ζ={:.3}, Δt={}",
                params.beta,
                params.gamma,
                oscillator.natural_frequency(),
                oscillator.damping_ratio(),
                params.time_step,
            ))
            .legend(),
    )?;

    Ok(())
}

/// Applies a single `name=value` override.
fn apply(params: &mut Parameters, arg: &str) -> Result<(), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("Expected name=value, got `{arg}`"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid value for {name}: `{value}` is not a number"))?;

    let field = match name.trim() {
        "mass" => &mut params.mass,
        "stiffness" => &mut params.stiffness,
        "damping" => &mut params.damping,
        "initial_displacement" => &mut params.initial_displacement,
        "initial_velocity" => &mut params.initial_velocity,
        "time_step" => &mut params.time_step,
        "total_time" => &mut params.total_time,
        "beta" => &mut params.beta,
        "gamma" => &mut params.gamma,
        other => return Err(format!("Unknown parameter: {other}")),
    };
    *field = value;
    Ok(())
}
