//! CLI subcommand implementations.

pub mod create;
pub mod delete;
pub mod posts;
pub mod seed;
pub mod tags;
pub mod update;
