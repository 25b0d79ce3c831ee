//! Analysis modules.
//!
//! This module turns an input pair into a structured report.

pub mod aggregator;

pub use aggregator::*;
