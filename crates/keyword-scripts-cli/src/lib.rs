//! Support library for the `kwscript` command.
//!
//! Loads configuration from the environment, installs logging, provides a
//! Fluent-backed label translator and turns JSON test case documents into
//! keyword test cases ready for the script writers.

pub mod config;
pub mod document;
pub mod error;
pub mod localisation;
pub mod logging;
pub mod output;
