//! clipconverter library
//!
//! Exposes the container parser, preview reader and CLI commands for the
//! `clipconverter` binary.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial library structure

pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod db;
pub mod error;
pub mod extract;

#[cfg(test)]
mod test_support;
