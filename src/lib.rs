//! Revboard Library
//!
//! This module exposes the CLI, data, and sync modules for use in
//! integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod logging;
pub mod sync;
