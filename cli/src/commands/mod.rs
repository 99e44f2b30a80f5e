//! # treeforge Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Aggregates the command modules of the treeforge CLI so `main.rs` can route
//! to them.
//!
//! ## Command Groups
//!
//! - `generate`: the default command; markdown diagram → directories and files
//! - `tree`: prints an existing directory as a diagram
//! - `stats`: counts folders, files and source lines
//!
pub mod generate;
pub mod stats;
pub mod tree;
