//! Run configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/run/config_test.rs"]
mod config_test;

extern crate serde_json;

use evostat::evolution::{DEFAULT_MAX_GENERATIONS, Evolution, EvolutionBuilder, UniformBreeder};
use evostat::problems::{DEFAULT_NUM_VARIABLES, Zdt, ZdtVariant};
use evostat::statistics::{ShortStatistics, StatisticsConfig};
use evostat::utils::{DefaultRandom, Environment, GenericResult, InfoLogger, Random, get_cpus};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::sync::Arc;

/// A default size of a subpopulation.
pub const DEFAULT_SUBPOPULATION_SIZE: usize = 100;

/// A run configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Specifies benchmark problem configuration.
    pub problem: Option<ProblemConfig>,
    /// Specifies population configuration.
    pub population: Option<PopulationConfig>,
    /// Specifies run termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies statistics configuration.
    pub statistics: Option<StatisticsFileConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// A benchmark problem configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemConfig {
    /// Problem variant: zdt1, zdt2 or zdt3. Default is zdt3.
    #[serde(rename = "type")]
    pub variant: Option<String>,
    /// Amount of decision variables. Default is 30.
    pub num_variables: Option<usize>,
}

/// A population configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PopulationConfig {
    /// Amount of subpopulations. Default is 1.
    pub subpopulations: Option<usize>,
    /// Size of every subpopulation. Default is 100.
    pub size: Option<usize>,
    /// Amount of best candidates kept in each subpopulation. Default is 1.
    pub elites: Option<usize>,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TerminationConfig {
    /// Amount of generations to run. Default is 100.
    pub max_generations: Option<usize>,
}

/// A statistics configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatisticsFileConfig {
    /// Output is produced every `modulus` generations. Default is 1.
    pub modulus: Option<usize>,
    /// Gathers timing, memory and size statistics. Default is false.
    pub gather_full: Option<bool>,
    /// Reports per subpopulation statistics. Default is false.
    pub gather_subpops: Option<bool>,
    /// A statistics file path, standard output is used when not set.
    pub file: Option<String>,
    /// Compresses statistics file. Default is false.
    pub gzip: Option<bool>,
}

/// An environment configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// A seed for repeatable runs.
    pub seed: Option<u64>,
    /// Amount of threads used for evaluation. Default is number of cpus.
    pub parallelism: Option<usize>,
    /// Specifies diagnostic logging.
    pub logging: Option<LoggingConfig>,
}

/// A diagnostic logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enables diagnostic messages.
    pub enabled: bool,
    /// A prefix of every message.
    pub prefix: Option<String>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates an evolution from config.
pub fn create_evolution_from_config(config: &Config) -> GenericResult<Evolution> {
    let problem = create_problem(config.problem.as_ref())?;
    let breeder = create_breeder(config.population.as_ref())?;
    let statistics = ShortStatistics::from_config(&create_statistics_config(config.statistics.as_ref()))?;
    let environment = create_environment(config.environment.as_ref())?;
    let max_generations = config.termination.as_ref().and_then(|termination| termination.max_generations);

    EvolutionBuilder::default()
        .with_problem(Arc::new(problem))
        .with_breeder(Box::new(breeder))
        .with_statistics(Box::new(statistics))
        .with_environment(Arc::new(environment))
        .with_max_generations(Some(max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS)))
        .build()
}

/// Creates statistics configuration, missing properties get their default values.
pub fn create_statistics_config(config: Option<&StatisticsFileConfig>) -> StatisticsConfig {
    let defaults = StatisticsConfig::default();

    match config {
        Some(config) => StatisticsConfig::default()
            .with_modulus(config.modulus.unwrap_or(defaults.modulus))
            .with_full(config.gather_full.unwrap_or(defaults.gather_full))
            .with_subpops(config.gather_subpops.unwrap_or(defaults.gather_subpops))
            .with_file(config.file.as_ref().map(PathBuf::from), config.gzip.unwrap_or(defaults.gzip)),
        None => defaults,
    }
}

fn create_problem(config: Option<&ProblemConfig>) -> GenericResult<Zdt> {
    let variant = match config.and_then(|config| config.variant.as_ref()) {
        Some(variant) => variant.parse::<ZdtVariant>()?,
        None => ZdtVariant::default(),
    };
    let num_variables = config.and_then(|config| config.num_variables).unwrap_or(DEFAULT_NUM_VARIABLES);

    Zdt::new(variant, num_variables)
}

fn create_breeder(config: Option<&PopulationConfig>) -> GenericResult<UniformBreeder> {
    let subpops = config.and_then(|config| config.subpopulations).unwrap_or(1);
    let size = config.and_then(|config| config.size).unwrap_or(DEFAULT_SUBPOPULATION_SIZE);
    let elites = config.and_then(|config| config.elites).unwrap_or_else(|| size.min(1));

    UniformBreeder::new(subpops, size, elites)
}

fn create_environment(config: Option<&EnvironmentConfig>) -> GenericResult<Environment> {
    let random: Arc<dyn Random> = match config.and_then(|config| config.seed) {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let parallelism = config.and_then(|config| config.parallelism).unwrap_or_else(get_cpus);

    Environment::new(random, parallelism, create_logger(config.and_then(|config| config.logging.as_ref())))
}

fn create_logger(config: Option<&LoggingConfig>) -> InfoLogger {
    match config {
        Some(LoggingConfig { enabled: true, prefix }) => {
            let prefix = prefix.clone().unwrap_or_default();
            Arc::new(move |msg: &str| eprintln!("{prefix}{msg}"))
        }
        Some(LoggingConfig { enabled: false, .. }) => Arc::new(|_: &str| {}),
        None => Arc::new(|msg: &str| eprintln!("{msg}")),
    }
}
