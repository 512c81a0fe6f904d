//! A library part of the command line interface: reads run configuration and assembles an evolution.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
