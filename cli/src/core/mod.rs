//! # treeforge Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure components the commands build on:
//!
//! - `config`: configuration loading, merging and validation
//! - `error`: error types and the crate-wide `Result` alias
//! - `templating`: the content-template providers that fill generated files
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{Result, ScaffoldError}; // For error handling
//! use crate::core::templating::ContentTemplateProvider; // For file boilerplate
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
