use imult::harness::{UnitLabel, run_all, timed_run_with, timed_test_run};
use imult::multiply::{Variant, trusted_product};
use imult::{HarnessError, Operand};

/// Operand pairs inside every variant's contract (b >= 0, no overflow)
fn contract_pairs() -> Vec<(Operand, Operand)> {
    let mut pairs = Vec::new();
    for a in [-1000, -37, -1, 0, 1, 2, 7, 23, 99, 1000] {
        for b in [0, 1, 3, 12, 435, 999] {
            pairs.push((a, b));
        }
    }
    pairs
}

#[test]
fn qa_tc_every_variant_matches_operator_within_contract() {
    for (a, b) in contract_pairs() {
        let expected = a * b;
        for variant in Variant::ALL {
            assert_eq!(
                variant.multiply(a, b),
                expected,
                "{} disagrees for {} * {}",
                variant,
                a,
                b
            );
        }
    }
}

#[test]
fn qa_tc_variants_are_idempotent() {
    for variant in Variant::ALL {
        let first = variant.multiply(23, 435);
        for _ in 0..100 {
            assert_eq!(variant.multiply(23, 435), first);
        }
    }
}

#[test]
fn qa_tc_fixed_run_has_zero_mismatches() {
    // The benchmark binary's exact configuration
    assert_eq!(trusted_product(23, 435), 10005);
    let timings = run_all(23, 435, 10_000, |_| {}).expect("no variant may mismatch");
    assert_eq!(timings.len(), 4);
    for timing in &timings {
        assert_eq!(timing.iterations, 10_000);
        assert!(timing.report_line(UnitLabel::Micros).ends_with("us for 10000 iterations"));
    }
}

#[test]
fn qa_tc_seven_times_three() {
    for variant in [Variant::Operator, Variant::NaiveLoop, Variant::ReducedLoop] {
        assert_eq!(variant.multiply(7, 3), 21, "{}", variant);
        timed_test_run(variant, 7, 3, 1_000).unwrap();
    }
}

#[test]
fn qa_tc_negative_b_is_outside_loop_contract() {
    // Operator and native instruction stay correct
    assert!(timed_test_run(Variant::Operator, 7, -3, 10).is_ok());
    assert!(timed_test_run(Variant::NativeInstruction, 7, -3, 10).is_ok());

    // Naive loop runs zero times for a negative count
    let err = timed_test_run(Variant::NaiveLoop, 7, -3, 10).unwrap_err();
    assert_eq!(
        err,
        HarnessError::Mismatch {
            variant: Variant::NaiveLoop,
            a: 7,
            b: -3,
            expected: -21,
            actual: 0,
            iteration: 0,
        }
    );
}

#[test]
fn qa_tc_faulty_multiplier_is_observable_not_fatal() {
    fn always_zero(_: Operand, _: Operand) -> Operand {
        0
    }

    let err = timed_run_with(Variant::NativeInstruction, always_zero, 23, 435, 10_000).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("native_instruction"), "{}", message);
    assert!(message.contains("expected 10005"), "{}", message);
    assert!(message.contains("iteration 0"), "{}", message);
}
