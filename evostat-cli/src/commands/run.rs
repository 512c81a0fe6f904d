#[cfg(test)]
#[path = "../../tests/unit/commands/run_test.rs"]
mod run_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use evostat_cli::extensions::run::config::*;
use std::io::BufReader;

pub const CONFIG_ARG_NAME: &str = "config";
pub const GENERATIONS_ARG_NAME: &str = "generations";
pub const SUBPOPS_ARG_NAME: &str = "subpops";
pub const POP_SIZE_ARG_NAME: &str = "pop-size";
pub const ELITES_ARG_NAME: &str = "elites";
pub const NUM_VARIABLES_ARG_NAME: &str = "num-variables";
pub const VARIANT_ARG_NAME: &str = "variant";
pub const MODULUS_ARG_NAME: &str = "modulus";
pub const FULL_ARG_NAME: &str = "full";
pub const PER_SUBPOP_ARG_NAME: &str = "per-subpop";
pub const OUT_STATS_ARG_NAME: &str = "out-stats";
pub const GZIP_ARG_NAME: &str = "gzip";
pub const SEED_ARG_NAME: &str = "seed";

pub fn get_run_app() -> Command {
    Command::new("run")
        .about("Runs a benchmark evolution and writes per generation statistics")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a json file with run configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies amount of generations to run")
                .short('g')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SUBPOPS_ARG_NAME)
                .help("Specifies amount of subpopulations")
                .short('s')
                .long(SUBPOPS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POP_SIZE_ARG_NAME)
                .help("Specifies size of every subpopulation")
                .short('p')
                .long(POP_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ELITES_ARG_NAME)
                .help("Specifies amount of best candidates kept in every subpopulation")
                .long(ELITES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NUM_VARIABLES_ARG_NAME)
                .help("Specifies amount of decision variables")
                .short('n')
                .long(NUM_VARIABLES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(VARIANT_ARG_NAME)
                .help("Specifies benchmark problem variant")
                .long(VARIANT_ARG_NAME)
                .required(false)
                .value_parser(["zdt1", "zdt2", "zdt3"]),
        )
        .arg(
            Arg::new(MODULUS_ARG_NAME)
                .help("Specifies how often statistics are written: every `modulus` generations")
                .short('m')
                .long(MODULUS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FULL_ARG_NAME)
                .help("Gathers timing, memory and size statistics")
                .long(FULL_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(PER_SUBPOP_ARG_NAME)
                .help("Writes statistics of every subpopulation")
                .long(PER_SUBPOP_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_STATS_ARG_NAME)
                .help("Specifies path to the file for statistics output")
                .short('o')
                .long(OUT_STATS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GZIP_ARG_NAME)
                .help("Compresses statistics file, `.gz` suffix is added to its name")
                .long(GZIP_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies a seed for repeatable runs").long(SEED_ARG_NAME).required(false))
}

pub fn run_evolution(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;
    let evolution = create_evolution_from_config(&config).map_err(|err| format!("cannot configure run: '{err}'"))?;

    evolution.run().map(|_| ()).map_err(|err| format!("run failed: '{err}'"))
}

/// Reads config file when it is specified and applies command line overrides on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?,
        None => Config::default(),
    };

    let problem = config.problem.get_or_insert_with(Default::default);
    if let Some(variant) = matches.get_one::<String>(VARIANT_ARG_NAME) {
        problem.variant = Some(variant.clone());
    }
    set_if_some(&mut problem.num_variables, parse_int_value(matches, NUM_VARIABLES_ARG_NAME, "num variables")?);

    let population = config.population.get_or_insert_with(Default::default);
    set_if_some(&mut population.subpopulations, parse_int_value(matches, SUBPOPS_ARG_NAME, "subpopulations")?);
    set_if_some(&mut population.size, parse_int_value(matches, POP_SIZE_ARG_NAME, "population size")?);
    set_if_some(&mut population.elites, parse_int_value(matches, ELITES_ARG_NAME, "elites")?);

    let termination = config.termination.get_or_insert_with(Default::default);
    set_if_some(&mut termination.max_generations, parse_int_value(matches, GENERATIONS_ARG_NAME, "max generations")?);

    let statistics = config.statistics.get_or_insert_with(Default::default);
    set_if_some(&mut statistics.modulus, parse_int_value(matches, MODULUS_ARG_NAME, "modulus")?);
    set_if_some(&mut statistics.file, matches.get_one::<String>(OUT_STATS_ARG_NAME).cloned());
    if matches.get_flag(FULL_ARG_NAME) {
        statistics.gather_full = Some(true);
    }
    if matches.get_flag(PER_SUBPOP_ARG_NAME) {
        statistics.gather_subpops = Some(true);
    }
    if matches.get_flag(GZIP_ARG_NAME) {
        statistics.gzip = Some(true);
    }

    let environment = config.environment.get_or_insert_with(Default::default);
    set_if_some(&mut environment.seed, parse_int_value(matches, SEED_ARG_NAME, "seed")?);

    Ok(config)
}

fn set_if_some<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
