//! Multiplier Variants - four strategies for the same `i32` product
//!
//! | Variant             | Strategy                                     |
//! |---------------------|----------------------------------------------|
//! | `Operator`          | native `*` (wrapping), the ground truth      |
//! | `NaiveLoop`         | add `a` to itself `b` times                  |
//! | `ReducedLoop`       | loop over the smaller-magnitude operand      |
//! | `NativeInstruction` | one hardware multiply via inline assembly    |
//!
//! All arithmetic wraps in two's complement, so overflow never panics in
//! debug builds and matches what the hardware instruction produces.
//!
//! ## Loop variants and negative counts
//! The naive loop treats `b` as a non-negative count. A negative `b` runs
//! zero iterations and yields `0`; this is outside its verified contract.
//! The reduced loop flips the signs of both operands when its chosen count
//! is negative, so it stays correct for every input.

use std::fmt;
use std::hint::black_box;

use crate::core_types::{MultiplyFn, Operand};

// ============================================================================
// Variants
// ============================================================================

/// Baseline: the native multiply operator.
#[inline(never)]
pub fn multiply_operator(a: Operand, b: Operand) -> Operand {
    a.wrapping_mul(b)
}

/// Simple loop adding `a` to the result `b` times.
#[inline(never)]
pub fn multiply_naive_loop(a: Operand, b: Operand) -> Operand {
    accumulate(a, b)
}

/// Loop limited to the operand with the smaller magnitude.
///
/// Ties keep `b` as the count.
#[inline(never)]
pub fn multiply_reduced_loop(a: Operand, b: Operand) -> Operand {
    let (addend, count) = if a.unsigned_abs() < b.unsigned_abs() {
        (b, a)
    } else {
        (a, b)
    };
    if count < 0 {
        // (-x) * (-y) == x * y. A MIN count only occurs for MIN * MIN, which wraps to 0.
        accumulate(addend.wrapping_neg(), count.wrapping_neg())
    } else {
        accumulate(addend, count)
    }
}

/// Product computed by the processor's multiply instruction.
///
/// Uses `imul` on x86/x86_64 and `mul` on aarch64 when the `native-asm`
/// feature is enabled. Everywhere else this is [`multiply_operator`].
#[inline(never)]
pub fn multiply_native_instruction(a: Operand, b: Operand) -> Operand {
    native_mul(a, b)
}

/// The oracle every variant is checked against.
#[inline]
pub fn trusted_product(a: Operand, b: Operand) -> Operand {
    a.wrapping_mul(b)
}

/// Whether [`multiply_native_instruction`] runs hand-written assembly on
/// this build, as opposed to the operator fallback.
pub const fn native_instruction_available() -> bool {
    cfg!(all(
        feature = "native-asm",
        any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "aarch64"
        )
    ))
}

#[inline(always)]
fn accumulate(addend: Operand, count: Operand) -> Operand {
    let mut result: Operand = 0;
    for _ in 0..count {
        // black_box keeps LLVM from folding the loop back into a multiply
        result = black_box(result.wrapping_add(addend));
    }
    result
}

#[cfg(all(feature = "native-asm", any(target_arch = "x86", target_arch = "x86_64")))]
#[inline(always)]
fn native_mul(a: Operand, b: Operand) -> Operand {
    let mut acc = a;
    // SAFETY: register-only two-operand imul; touches no memory or stack.
    unsafe {
        core::arch::asm!(
            "imul {acc:e}, {rhs:e}",
            acc = inout(reg) acc,
            rhs = in(reg) b,
            options(pure, nomem, nostack),
        );
    }
    acc
}

#[cfg(all(feature = "native-asm", target_arch = "aarch64"))]
#[inline(always)]
fn native_mul(a: Operand, b: Operand) -> Operand {
    let mut acc = a;
    // SAFETY: register-only 32-bit mul; flags are untouched on aarch64.
    unsafe {
        core::arch::asm!(
            "mul {acc:w}, {acc:w}, {rhs:w}",
            acc = inout(reg) acc,
            rhs = in(reg) b,
            options(pure, nomem, nostack, preserves_flags),
        );
    }
    acc
}

#[cfg(not(all(
    feature = "native-asm",
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64"
    )
)))]
#[inline(always)]
fn native_mul(a: Operand, b: Operand) -> Operand {
    multiply_operator(a, b)
}

// ============================================================================
// Variant selector
// ============================================================================

/// One of the interchangeable multiplication strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Operator,
    NaiveLoop,
    ReducedLoop,
    NativeInstruction,
}

impl Variant {
    /// Run order used by the benchmark binary.
    pub const ALL: [Variant; 4] = [
        Variant::Operator,
        Variant::NaiveLoop,
        Variant::ReducedLoop,
        Variant::NativeInstruction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Operator => "operator",
            Variant::NaiveLoop => "naive_loop",
            Variant::ReducedLoop => "reduced_loop",
            Variant::NativeInstruction => "native_instruction",
        }
    }

    /// Expected speed of the strategy, logged before each run.
    pub fn description(self) -> &'static str {
        match self {
            Variant::Operator => "very fast, native operator",
            Variant::NaiveLoop => "slow, one addition per unit of b",
            Variant::ReducedLoop => "faster, depends on the gap between |a| and |b|",
            Variant::NativeInstruction => {
                if native_instruction_available() {
                    "very fast, inline assembly multiply"
                } else {
                    "operator fallback, no inline assembly on this target"
                }
            }
        }
    }

    /// The function implementing this variant.
    pub fn func(self) -> MultiplyFn {
        match self {
            Variant::Operator => multiply_operator,
            Variant::NaiveLoop => multiply_naive_loop,
            Variant::ReducedLoop => multiply_reduced_loop,
            Variant::NativeInstruction => multiply_native_instruction,
        }
    }

    #[inline]
    pub fn multiply(self, a: Operand, b: Operand) -> Operand {
        (self.func())(a, b)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
