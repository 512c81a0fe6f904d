//! Contains a minimal generational run driver which produces candidates, evaluates them and
//! notifies statistics at every generation boundary.

use crate::models::{Population, Species};
use crate::utils::Random;

mod breeder;
pub use self::breeder::*;

mod run;
pub use self::run::*;

/// Produces the initial population and every following generation.
pub trait Breeder: Send + Sync {
    /// Creates the initial population.
    fn initialize(&self, species: &Species, random: &dyn Random) -> Population;

    /// Creates the next population from the current one.
    fn breed(&self, population: &Population, species: &Species, random: &dyn Random) -> Population;
}
