//! This module reimports commonly used types.

pub use crate::evolution::{Breeder, Evolution, EvolutionBuilder, EvolutionResult, UniformBreeder};

pub use crate::models::{Candidate, Fitness, Population, Species, Subpopulation};
pub use crate::models::{Direction, Dominance, ParetoDominance, ScalarOrder, WeightedSum};

pub use crate::problems::{Evaluable, Zdt, ZdtVariant};

pub use crate::statistics::{ResourceProbe, RunState, ShortStatistics, Statistics, StatisticsConfig, StatisticsLog};

pub use crate::utils::{DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random};
