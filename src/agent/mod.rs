//! Agent tools.
//!
//! This module provides the arithmetic and primality tools the agent
//! uses, and the executor that runs them by name.

pub mod tools;

pub use tools::{
    add, get_tool_definitions, is_prime, multiply, subtract, ToolCall, ToolExecutor, ToolResult,
};
