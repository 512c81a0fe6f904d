//! This crate contains the evaluation and reporting layer of a population based optimizer:
//! multi-objective benchmark problems which score candidates and a statistics aggregator which
//! tracks best-so-far candidates and per-generation aggregates over an evolving population.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod models;
pub mod prelude;
pub mod problems;
pub mod statistics;
pub mod utils;
