//! Arithmetic and primality tools.
//!
//! The four functions here are the agent's atomic skills. They are pure
//! and stateless; the [`ToolExecutor`] exposes them under their tool
//! names so they can be invoked with JSON arguments.

use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Return `a + b`.
pub fn add(a: i64, b: i64) -> Result<i64, EvalError> {
    debug!(a, b, "performing addition");
    a.checked_add(b).ok_or(EvalError::Overflow {
        operation: "addition",
        a,
        b,
    })
}

/// Return `a - b`.
pub fn subtract(a: i64, b: i64) -> Result<i64, EvalError> {
    debug!(a, b, "performing subtraction");
    a.checked_sub(b).ok_or(EvalError::Overflow {
        operation: "subtraction",
        a,
        b,
    })
}

/// Return `a * b`.
pub fn multiply(a: i64, b: i64) -> Result<i64, EvalError> {
    debug!(a, b, "performing multiplication");
    a.checked_mul(b).ok_or(EvalError::Overflow {
        operation: "multiplication",
        a,
        b,
    })
}

/// Return whether `n` is prime.
///
/// Trial division over the 6k±1 wheel up to `sqrt(n)`. Values below 2,
/// including all negatives, are not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without overflowing near i64::MAX
    let mut i: i64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Tool definition in function-calling format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A request to run one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Result of executing a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(output: String) -> Self {
        Self {
            success: true,
            output,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(message),
        }
    }
}

impl From<Result<i64, EvalError>> for ToolResult {
    fn from(result: Result<i64, EvalError>) -> Self {
        match result {
            Ok(value) => ToolResult::success(value.to_string()),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}

/// Dispatches tool calls to the arithmetic and primality functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolExecutor;

impl ToolExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Execute a tool call and return the result.
    pub fn execute(&self, tool_call: &ToolCall) -> ToolResult {
        let name = &tool_call.function.name;
        let args = &tool_call.function.arguments;

        debug!("Executing tool: {} with args: {:?}", name, args);

        match name.as_str() {
            "add_numbers" => self.binary(args, add),
            "subtract_numbers" => self.binary(args, subtract),
            "multiply_numbers" => self.binary(args, multiply),
            "is_prime" => match integer_arg(args, "n") {
                Ok(n) => ToolResult::success(is_prime(n).to_string()),
                Err(e) => ToolResult::error(e),
            },
            _ => ToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    fn binary(&self, args: &Value, op: fn(i64, i64) -> Result<i64, EvalError>) -> ToolResult {
        let a = match integer_arg(args, "a") {
            Ok(a) => a,
            Err(e) => return ToolResult::error(e),
        };
        let b = match integer_arg(args, "b") {
            Ok(b) => b,
            Err(e) => return ToolResult::error(e),
        };
        op(a, b).into()
    }
}

fn integer_arg(args: &Value, name: &str) -> Result<i64, String> {
    match args.get(name) {
        None | Some(Value::Null) => Err(format!("Missing required parameter: {}", name)),
        Some(v) => v
            .as_i64()
            .ok_or_else(|| format!("Parameter {} must be a 64-bit integer, got {}", name, v)),
    }
}

fn binary_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "a": {
                "type": "integer",
                "description": "Left operand"
            },
            "b": {
                "type": "integer",
                "description": "Right operand"
            }
        },
        "required": ["a", "b"]
    })
}

/// Get the definitions of all available tools.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: "add_numbers".to_string(),
                description: "Return a + b.".to_string(),
                parameters: binary_parameters(),
            },
        },
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: "subtract_numbers".to_string(),
                description: "Return a - b.".to_string(),
                parameters: binary_parameters(),
            },
        },
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: "multiply_numbers".to_string(),
                description: "Return a * b.".to_string(),
                parameters: binary_parameters(),
            },
        },
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: "is_prime".to_string(),
                description: "Return true if n is prime, else false.".to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "n": {
                            "type": "integer",
                            "description": "Number to test"
                        }
                    },
                    "required": ["n"]
                }),
            },
        },
    ]
}
