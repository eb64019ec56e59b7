//! Timing Harness - run a variant in a loop, check every product, time it
//!
//! One call per variant; the only state is the start/stop `Instant` pair.
//! Elapsed time is the full monotonic difference, so intervals that cross
//! a second boundary are reported correctly.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core_types::{Iterations, MultiplyFn, Operand};
use crate::error::HarnessError;
use crate::multiply::{Variant, trusted_product};

/// Unit label printed after the elapsed value. The value is always
/// microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitLabel {
    /// `us`
    #[default]
    Micros,
    /// The historical `ms` label, kept for output compatibility even though
    /// the number is microseconds.
    LegacyMs,
}

impl UnitLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitLabel::Micros => "us",
            UnitLabel::LegacyMs => "ms",
        }
    }
}

/// Result of one harness invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub variant: Variant,
    pub iterations: Iterations,
    pub elapsed: Duration,
}

impl Timing {
    #[inline]
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    /// `Func took <elapsed><unit> for <iterations> iterations`
    pub fn report_line(&self, label: UnitLabel) -> String {
        format!(
            "Func took {}{} for {} iterations",
            self.elapsed_micros(),
            label.as_str(),
            self.iterations
        )
    }
}

/// Time `iterations` calls of `variant` on `(a, b)`, checking each result
/// against [`trusted_product`].
///
/// Returns on the first mismatch.
pub fn timed_test_run(
    variant: Variant,
    a: Operand,
    b: Operand,
    iterations: Iterations,
) -> Result<Timing, HarnessError> {
    timed_run_with(variant, variant.func(), a, b, iterations)
}

/// Same as [`timed_test_run`] but drives an arbitrary `func`, reporting it
/// under `variant`.
pub fn timed_run_with(
    variant: Variant,
    func: MultiplyFn,
    a: Operand,
    b: Operand,
    iterations: Iterations,
) -> Result<Timing, HarnessError> {
    let expected = trusted_product(a, b);

    let start = Instant::now();
    for iteration in 0..iterations {
        let actual = func(black_box(a), black_box(b));
        if actual != expected {
            return Err(HarnessError::Mismatch {
                variant,
                a,
                b,
                expected,
                actual,
                iteration,
            });
        }
    }
    let elapsed = start.elapsed();

    Ok(Timing {
        variant,
        iterations,
        elapsed,
    })
}

/// Run every variant in [`Variant::ALL`] order, stopping at the first
/// failure. `on_timing` sees each result as soon as its variant finishes.
pub fn run_all(
    a: Operand,
    b: Operand,
    iterations: Iterations,
    mut on_timing: impl FnMut(&Timing),
) -> Result<Vec<Timing>, HarnessError> {
    let mut timings = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        tracing::debug!(variant = variant.name(), "{}", variant.description());
        let timing = timed_test_run(variant, a, b, iterations)?;
        tracing::debug!(
            variant = variant.name(),
            iterations,
            elapsed = ?timing.elapsed,
            "variant finished"
        );
        on_timing(&timing);
        timings.push(timing);
    }
    Ok(timings)
}
