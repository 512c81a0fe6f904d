//! Contains the logic to observe a population at generation boundaries and report statistics.

use crate::models::{Candidate, Population};
use crate::utils::GenericResult;

mod config;
pub use self::config::*;

mod generation;
pub use self::generation::*;

mod output;
pub use self::output::*;

mod probe;
pub use self::probe::*;

mod running;
pub use self::running::*;

mod short;
pub use self::short::*;

/// A read-only view on the run passed to statistics hooks.
pub struct RunState<'a> {
    /// Current generation index.
    pub generation: usize,
    /// Current population, empty before initialization.
    pub population: &'a Population,
}

impl<'a> RunState<'a> {
    /// Creates a new instance of `RunState`.
    pub fn new(generation: usize, population: &'a Population) -> Self {
        Self { generation, population }
    }
}

/// Observes the generational cycle. Hooks are called by the run driver in this order:
/// `pre_initialization`, `post_initialization`, then for every generation `pre_evaluation`,
/// `post_evaluation` and, unless the run stops, `pre_breeding`, `post_breeding`.
pub trait Statistics {
    /// Called before the initial population is created.
    fn pre_initialization(&mut self, _state: &RunState) -> GenericResult<()> {
        Ok(())
    }

    /// Called after the initial population is created.
    fn post_initialization(&mut self, _state: &RunState) -> GenericResult<()> {
        Ok(())
    }

    /// Called before the next population is bred.
    fn pre_breeding(&mut self, _state: &RunState) -> GenericResult<()> {
        Ok(())
    }

    /// Called after the next population is bred, but before the generation index is advanced.
    fn post_breeding(&mut self, _state: &RunState) -> GenericResult<()> {
        Ok(())
    }

    /// Called before the population is evaluated.
    fn pre_evaluation(&mut self, _state: &RunState) -> GenericResult<()> {
        Ok(())
    }

    /// Called once all candidates of the generation are evaluated.
    fn post_evaluation(&mut self, _state: &RunState) -> GenericResult<()> {
        Ok(())
    }

    /// Called once after the last generation, flushes whatever output is pending.
    fn finish(&mut self) -> GenericResult<()> {
        Ok(())
    }

    /// Returns the best candidate seen so far per subpopulation.
    fn best_so_far(&self) -> Vec<Option<&Candidate>> {
        vec![]
    }
}
