#[cfg(test)]
#[path = "../../tests/unit/evolution/run_test.rs"]
mod run_test;

use super::*;
use crate::models::Candidate;
use crate::problems::Evaluable;
use crate::statistics::{RunState, Statistics};
use crate::utils::{Environment, GenericResult, Timer, parallel_foreach_mut};
use std::sync::Arc;

/// A default amount of generations.
pub const DEFAULT_MAX_GENERATIONS: usize = 100;

/// Keeps the outcome of the run.
pub struct EvolutionResult {
    /// Amount of generations which were run.
    pub generations: usize,
    /// The last population.
    pub population: Population,
    /// The best candidate seen so far per subpopulation.
    pub best_so_far: Vec<Option<Candidate>>,
}

/// Runs generations strictly one after another: evaluation of a generation is finished before
/// its statistics are gathered.
pub struct Evolution {
    problem: Arc<dyn Evaluable>,
    breeder: Box<dyn Breeder>,
    statistics: Box<dyn Statistics>,
    environment: Arc<Environment>,
    max_generations: usize,
}

impl Evolution {
    /// Runs evolution until the maximum amount of generations is reached.
    pub fn run(mut self) -> GenericResult<EvolutionResult> {
        let time = Timer::start();
        let species = self.problem.species().clone();
        let random = self.environment.random.clone();
        let empty = Population::default();
        let mut generation = 0;

        self.statistics.pre_initialization(&RunState::new(generation, &empty))?;
        let (mut population, duration) =
            Timer::measure_duration(|| self.breeder.initialize(&species, random.as_ref()));
        self.log(format!(
            "created initial population of {} candidates in {}ms",
            population.size(),
            duration.as_millis()
        ));
        self.statistics.post_initialization(&RunState::new(generation, &population))?;

        loop {
            self.statistics.pre_evaluation(&RunState::new(generation, &population))?;
            self.evaluate(&mut population);
            self.statistics.post_evaluation(&RunState::new(generation, &population))?;

            if generation + 1 >= self.max_generations {
                break;
            }

            self.statistics.pre_breeding(&RunState::new(generation, &population))?;
            population = self.breeder.breed(&population, &species, random.as_ref());
            self.statistics.post_breeding(&RunState::new(generation, &population))?;

            generation += 1;
        }

        self.statistics.finish()?;

        let generations = generation + 1;
        let speed = generations as f64 / time.elapsed_secs_as_float().max(f64::EPSILON);
        self.log(format!("[{}s] total generations: {generations}, speed: {speed:.2} gen/sec", time.elapsed_secs()));

        let best_so_far =
            self.statistics.best_so_far().into_iter().map(|best| best.map(|best| best.deep_copy())).collect::<Vec<_>>();

        best_so_far.iter().enumerate().for_each(|(idx, best)| match best {
            Some(best) => self.log(format!("best of subpopulation {idx}: {}", self.problem.describe(best))),
            None => self.log(format!("subpopulation {idx} has no evaluated candidates")),
        });

        Ok(EvolutionResult { generations, population, best_so_far })
    }

    fn evaluate(&self, population: &mut Population) {
        let problem = self.problem.as_ref();

        self.environment.pool.execute(|| {
            population.subpops.iter_mut().for_each(|subpop| {
                parallel_foreach_mut(subpop.individuals.as_mut_slice(), |candidate| problem.evaluate(candidate))
            })
        });
    }

    fn log(&self, message: String) {
        (self.environment.logger)(message.as_str())
    }
}

/// Provides configurable way to build evolution using fluent interface style.
#[derive(Default)]
pub struct EvolutionBuilder {
    problem: Option<Arc<dyn Evaluable>>,
    breeder: Option<Box<dyn Breeder>>,
    statistics: Option<Box<dyn Statistics>>,
    environment: Option<Arc<Environment>>,
    max_generations: Option<usize>,
}

impl EvolutionBuilder {
    /// Sets a problem to evaluate candidates with.
    pub fn with_problem(mut self, problem: Arc<dyn Evaluable>) -> Self {
        self.problem = Some(problem);
        self
    }

    /// Sets a breeder which produces candidates.
    pub fn with_breeder(mut self, breeder: Box<dyn Breeder>) -> Self {
        self.breeder = Some(breeder);
        self
    }

    /// Sets statistics which observes the run.
    pub fn with_statistics(mut self, statistics: Box<dyn Statistics>) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Sets environment. Default is `Environment::default()`.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets max generations to be run. Default is 100.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Builds evolution.
    pub fn build(self) -> GenericResult<Evolution> {
        let problem = self.problem.ok_or_else(|| "problem is not specified".to_string())?;
        let breeder = self.breeder.ok_or_else(|| "breeder is not specified".to_string())?;
        let statistics = self.statistics.ok_or_else(|| "statistics is not specified".to_string())?;
        let environment = self.environment.unwrap_or_default();
        let max_generations = self.max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS);

        if max_generations == 0 {
            return Err("max generations must be a positive integer".into());
        }

        Ok(Evolution { problem, breeder, statistics, environment, max_generations })
    }
}
