//! CLI module for todos - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for todo and category
//! operations, plain-text views, and TUI launch.

pub mod commands;
pub mod render;

pub use commands::Cli;
