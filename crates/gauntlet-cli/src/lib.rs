//! Operator front end for the Gauntlet resiliency harness.
//!
//! Wraps the catalog store and the test runner in a clap CLI plus an
//! interactive menu. All state lives in the catalog blobs and the CSV
//! report files; the CLI itself is stateless between invocations.

pub mod cli;
pub mod commands;
pub mod config;
