//! imult - Integer Multiplication Microbenchmark
//!
//! Times four ways of computing an `i32` product and checks every result
//! against the native operator.
//!
//! # Modules
//!
//! - [`core_types`] - Operand and function type aliases
//! - [`multiply`] - The four multiplier variants
//! - [`harness`] - Timed, self-checking run loop
//! - [`error`] - Harness and config errors
//! - [`config`] - YAML logging/report configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod multiply;

// Convenient re-exports at crate root
pub use core_types::{Iterations, MultiplyFn, Operand};
pub use error::{ConfigError, HarnessError};
pub use harness::{Timing, UnitLabel, run_all, timed_run_with, timed_test_run};
pub use multiply::{
    Variant, multiply_naive_loop, multiply_native_instruction, multiply_operator,
    multiply_reduced_loop, native_instruction_available, trusted_product,
};
