//! imult - Integer Multiplication Microbenchmark
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │ Operands │───▶│  Harness  │───▶│  stdout  │
//! │ (const)  │    │(time+check│    │ one line │
//! └──────────┘    └───────────┘    └──────────┘
//!                  × 4 variants
//! ```
//!
//! No command-line arguments. A correctness mismatch ends the run with a
//! non-zero exit code.

use anyhow::Context;

use imult::config::{AppConfig, DEFAULT_CONFIG_PATH};
use imult::core_types::{Iterations, Operand};
use imult::harness::run_all;
use imult::multiply::native_instruction_available;

const OPERAND_A: Operand = 23;
const OPERAND_B: Operand = 435;
const ITERATIONS: Iterations = 10_000;

fn main() -> anyhow::Result<()> {
    // A broken config must not stop the benchmark; warn once logging is up
    let (app_config, config_error) = match AppConfig::load_or_default(DEFAULT_CONFIG_PATH) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let _log_guard = imult::logging::init_logging(&app_config);
    if let Some(e) = config_error {
        tracing::warn!("{}, using default config", e);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        a = OPERAND_A,
        b = OPERAND_B,
        iterations = ITERATIONS,
        native_asm = native_instruction_available(),
        "Starting imult"
    );

    run_all(OPERAND_A, OPERAND_B, ITERATIONS, |timing| {
        println!("{}", timing.report_line(app_config.unit_label));
    })
    .inspect_err(|e| tracing::error!("correctness check failed: {}", e))
    .context("variant failed its correctness check")?;

    Ok(())
}
