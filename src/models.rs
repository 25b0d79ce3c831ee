//! Data models for the math agent.
//!
//! This module contains the structures that make up an evaluation
//! report: the input pair, the per-operation results, the primality
//! flags and the report that bundles them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operation performed by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "Addition"),
            Operation::Subtraction => write!(f, "Subtraction"),
            Operation::Multiplication => write!(f, "Multiplication"),
        }
    }
}

impl Operation {
    /// All operations in report order.
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Returns the infix operator used in expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
        }
    }

    /// Returns an emoji representation of the operation.
    pub fn emoji(&self) -> &'static str {
        match self {
            Operation::Addition => "➕",
            Operation::Subtraction => "➖",
            Operation::Multiplication => "✖",
        }
    }
}

/// The two integers supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    pub a: i64,
    pub b: i64,
}

/// Result of one binary operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Symbolic form, e.g. `7 + 10`.
    pub expression: String,
    /// Computed value.
    pub value: i64,
}

impl OperationResult {
    pub fn new(operation: Operation, inputs: InputPair, value: i64) -> Self {
        Self {
            expression: format!("{} {} {}", inputs.a, operation.symbol(), inputs.b),
            value,
        }
    }

    /// Returns `expression = value`.
    pub fn equation(&self) -> String {
        format!("{} = {}", self.expression, self.value)
    }
}

/// Results of the three binary operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operations {
    pub addition: OperationResult,
    pub subtraction: OperationResult,
    pub multiplication: OperationResult,
}

impl Operations {
    /// Look up the result for an operation.
    pub fn get(&self, operation: Operation) -> &OperationResult {
        match operation {
            Operation::Addition => &self.addition,
            Operation::Subtraction => &self.subtraction,
            Operation::Multiplication => &self.multiplication,
        }
    }

    /// Iterate over the results in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Operation, &OperationResult)> {
        Operation::ALL.into_iter().map(move |op| (op, self.get(op)))
    }
}

/// Primality flags for both inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeAnalysis {
    pub a_is_prime: bool,
    pub b_is_prime: bool,
}

/// Human-readable yes/no indicator for a primality flag.
pub fn prime_indicator(is_prime: bool) -> &'static str {
    if is_prime {
        "✅ Yes"
    } else {
        "❌ No"
    }
}

/// The complete result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The evaluated input pair.
    pub inputs: InputPair,
    /// Results of addition, subtraction and multiplication.
    pub operations: Operations,
    /// Primality of each input.
    pub prime_analysis: PrimeAnalysis,
    /// Five-sentence summary, ready to copy/paste.
    pub summary_text: String,
}

impl Report {
    /// Returns `(value, is_prime)` for both inputs, `a` first.
    pub fn prime_checks(&self) -> [(i64, bool); 2] {
        [
            (self.inputs.a, self.prime_analysis.a_is_prime),
            (self.inputs.b, self.prime_analysis.b_is_prime),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Addition.symbol(), "+");
        assert_eq!(Operation::Subtraction.symbol(), "-");
        assert_eq!(Operation::Multiplication.symbol(), "*");
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Multiplication.to_string(), "Multiplication");
    }

    #[test]
    fn test_operation_result_expression() {
        let inputs = InputPair { a: -5, b: 4 };
        let result = OperationResult::new(Operation::Subtraction, inputs, -9);
        assert_eq!(result.expression, "-5 - 4");
        assert_eq!(result.equation(), "-5 - 4 = -9");
    }

    #[test]
    fn test_operations_iter_order() {
        let inputs = InputPair { a: 2, b: 3 };
        let operations = Operations {
            addition: OperationResult::new(Operation::Addition, inputs, 5),
            subtraction: OperationResult::new(Operation::Subtraction, inputs, -1),
            multiplication: OperationResult::new(Operation::Multiplication, inputs, 6),
        };

        let order: Vec<_> = operations.iter().map(|(op, _)| op).collect();
        assert_eq!(order, Operation::ALL.to_vec());
        assert_eq!(operations.get(Operation::Multiplication).value, 6);
    }

    #[test]
    fn test_prime_indicator() {
        assert_eq!(prime_indicator(true), "✅ Yes");
        assert_eq!(prime_indicator(false), "❌ No");
    }
}
