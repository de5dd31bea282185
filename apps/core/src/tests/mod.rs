//! Test Module
//!
//! Cross-module test suite for the prompt optimizer.
//!
//! ## Test Categories
//! - `brain_tests`: analyzer scenarios, determinism and monotonicity
//! - `optimizer_tests`: non-destructive rewriting and score bounds per strategy
//! - `engine_tests`: single-tool and batch optimization over the registry
//! - `config_tests`: settings from environment and files

pub mod brain_tests;
