//! Result aggregation.
//!
//! This module runs the arithmetic and primality tools over an input
//! pair and shapes their output into a [`Report`].

use crate::agent::tools::{add, is_prime, multiply, subtract};
use crate::error::EvalError;
use crate::models::{InputPair, Operation, OperationResult, Operations, PrimeAnalysis, Report};
use tracing::debug;

/// Evaluate `a` and `b` and build the complete report.
///
/// Each tool runs exactly once. An overflow in any operation is returned
/// unchanged and no report is produced.
pub fn evaluate(a: i64, b: i64) -> Result<Report, EvalError> {
    let inputs = InputPair { a, b };

    let operations = Operations {
        addition: OperationResult::new(Operation::Addition, inputs, add(a, b)?),
        subtraction: OperationResult::new(Operation::Subtraction, inputs, subtract(a, b)?),
        multiplication: OperationResult::new(Operation::Multiplication, inputs, multiply(a, b)?),
    };

    let prime_analysis = PrimeAnalysis {
        a_is_prime: is_prime(a),
        b_is_prime: is_prime(b),
    };

    let summary_text = generate_summary_text(inputs, &operations, prime_analysis);
    debug!(a, b, "evaluation complete");

    Ok(Report {
        inputs,
        operations,
        prime_analysis,
        summary_text,
    })
}

/// Generate the five-sentence summary for normal users.
pub fn generate_summary_text(
    inputs: InputPair,
    operations: &Operations,
    prime_analysis: PrimeAnalysis,
) -> String {
    let InputPair { a, b } = inputs;

    let lines = [
        format!(
            "The sum of {} and {} is {}.",
            a, b, operations.addition.value
        ),
        format!("{} minus {} is {}.", a, b, operations.subtraction.value),
        format!(
            "The product of {} and {} is {}.",
            a, b, operations.multiplication.value
        ),
        primality_sentence(a, prime_analysis.a_is_prime),
        primality_sentence(b, prime_analysis.b_is_prime),
    ];

    lines.join(" ")
}

fn primality_sentence(n: i64, is_prime: bool) -> String {
    let kind = if is_prime { "a prime" } else { "not a prime" };
    format!("{} is {} number.", n, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_default_pair() {
        let report = evaluate(7, 10).unwrap();

        assert_eq!(report.inputs, InputPair { a: 7, b: 10 });
        assert_eq!(report.operations.addition.value, 17);
        assert_eq!(report.operations.subtraction.value, -3);
        assert_eq!(report.operations.multiplication.value, 70);
        assert!(report.prime_analysis.a_is_prime);
        assert!(!report.prime_analysis.b_is_prime);
        assert_eq!(
            report.summary_text,
            "The sum of 7 and 10 is 17. 7 minus 10 is -3. The product of 7 and 10 is 70. \
             7 is a prime number. 10 is not a prime number."
        );
    }

    #[test]
    fn test_evaluate_expressions() {
        let report = evaluate(7, 10).unwrap();

        assert_eq!(report.operations.addition.expression, "7 + 10");
        assert_eq!(report.operations.subtraction.expression, "7 - 10");
        assert_eq!(report.operations.multiplication.expression, "7 * 10");
    }

    #[test]
    fn test_evaluate_ones() {
        let report = evaluate(1, 1).unwrap();

        assert_eq!(report.operations.addition.value, 2);
        assert_eq!(report.operations.subtraction.value, 0);
        assert_eq!(report.operations.multiplication.value, 1);
        assert!(!report.prime_analysis.a_is_prime);
        assert!(!report.prime_analysis.b_is_prime);
    }

    #[test]
    fn test_evaluate_negative() {
        let report = evaluate(-5, 4).unwrap();

        assert_eq!(report.operations.addition.value, -1);
        assert_eq!(report.operations.subtraction.value, -9);
        assert_eq!(report.operations.multiplication.value, -20);
        assert!(!report.prime_analysis.a_is_prime);
        assert!(!report.prime_analysis.b_is_prime);
        assert_eq!(report.operations.subtraction.expression, "-5 - 4");
        assert!(report.summary_text.contains("-5 is not a prime number."));
    }

    #[test]
    fn test_evaluate_matches_arithmetic() {
        let pairs = [(0, 0), (13, -13), (-100, -7), (123_456, 789), (97, 91)];

        for (a, b) in pairs {
            let report = evaluate(a, b).unwrap();
            assert_eq!(report.operations.addition.value, a + b);
            assert_eq!(report.operations.subtraction.value, a - b);
            assert_eq!(report.operations.multiplication.value, a * b);
            assert_eq!(report.prime_analysis.a_is_prime, is_prime(a));
            assert_eq!(report.prime_analysis.b_is_prime, is_prime(b));
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        assert_eq!(evaluate(97, 91).unwrap(), evaluate(97, 91).unwrap());
    }

    #[test]
    fn test_evaluate_propagates_overflow() {
        let err = evaluate(i64::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            EvalError::Overflow {
                operation: "addition",
                a: i64::MAX,
                b: 2,
            }
        );

        // Sum and difference fit, the product does not
        let err = evaluate(1 << 40, 1 << 40).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Overflow {
                operation: "multiplication",
                ..
            }
        ));
    }

    #[test]
    fn test_summary_sentence_count() {
        let report = evaluate(2, 3).unwrap();
        let sentences: Vec<_> = report.summary_text.split(". ").collect();
        assert_eq!(sentences.len(), 5);
        assert!(report.summary_text.ends_with("3 is a prime number."));
    }
}
