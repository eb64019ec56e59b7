//! Core types used throughout the benchmark
//!
//! Type aliases shared by the multiplier variants and the timing harness.

/// Operand and product type for every multiplier variant.
///
/// # Constraints:
/// - **Signed 32-bit**: matches the native `int` width the benchmark targets
/// - **Wrapping**: overflow wraps in two's complement, it never panics
pub type Operand = i32;

/// A multiplier variant as a plain function value.
///
/// Stateless and side-effect free; the harness calls it in a tight loop.
pub type MultiplyFn = fn(Operand, Operand) -> Operand;

/// Number of harness iterations
pub type Iterations = u32;
