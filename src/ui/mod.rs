//! UI rendering module for Revboard
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod help_overlay;
pub mod review_table;

pub use help_overlay::render as render_help_overlay;
pub use review_table::render_review_table;
