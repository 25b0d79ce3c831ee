//! MathAgent - arithmetic and primality agent
//!
//! Given two integers, computes their sum, difference, product and the
//! primality of each, and bundles the results into a [`Report`] with a
//! human-readable summary. The core ([`agent::tools`] and [`analysis`])
//! is pure; [`report`] and [`web`] are adapters that render it.

pub mod agent;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod web;

pub use agent::tools::{add, is_prime, multiply, subtract};
pub use analysis::evaluate;
pub use error::{EvalError, InputError};
pub use models::Report;
