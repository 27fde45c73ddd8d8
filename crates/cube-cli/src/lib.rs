//! CLI library components for cube-dbt.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod summary;
