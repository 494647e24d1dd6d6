//! # Skyburst Bench
//!
//! Library side of the benchmark binary: configuration, batch runner and
//! timing statistics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod perf;
pub mod runner;
