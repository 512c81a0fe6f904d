//! Contains logic to configure and start an evolution run.

pub mod config;
