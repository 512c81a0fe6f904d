//! A command line interface to run benchmark evolutions and collect per generation statistics.
//!

mod commands;

use clap::Command;
use commands::run::{get_run_app, run_evolution};
use std::process;

fn main() {
    let matches = Command::new("Evolution statistics")
        .version("0.1")
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to run benchmark evolutions and collect statistics")
        .subcommand(get_run_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => run_evolution(run_matches),
        _ => Err("No subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
