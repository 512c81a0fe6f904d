//! A statistics which writes one line of space separated numbers per sampled generation, so its
//! output is easy to parse with awk or other command line tools.
//!
//! A line starts with the generation number, followed, if `gather_full` is set, by how long
//! initialization (or breeding of this generation) took in milliseconds and how many bytes it
//! took, then by the same pair for evaluation. Then, if `gather_subpops` is set, every
//! subpopulation reports:
//!
//! - (if `gather_full`) mean size this generation and mean size so far
//! - mean fitness this generation
//! - best fitness this generation
//! - best fitness so far
//! - (if `gather_full`) size of the best candidate this generation and so far
//!
//! The line ends with the same seven columns calculated for the whole population. Memory figures
//! are approximate and may be negative.

#[cfg(test)]
#[path = "../../tests/unit/statistics/short_test.rs"]
mod short_test;

use super::*;
use crate::utils::Float;

/// A statistics aggregator which tracks best-so-far candidates per subpopulation and reports
/// per-generation aggregates.
pub struct ShortStatistics {
    modulus: usize,
    gather_full: bool,
    gather_subpops: bool,
    log: StatisticsLog,
    probe: Box<dyn ResourceProbe>,
    running: Vec<RunningBest>,
    pooled: RunningBest,
    last_time: i64,
    last_usage: i64,
}

impl ShortStatistics {
    /// Creates a new instance of `ShortStatistics` with given log and resource probe.
    pub fn new(config: &StatisticsConfig, log: StatisticsLog, probe: Box<dyn ResourceProbe>) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self {
            modulus: config.modulus,
            gather_full: config.gather_full,
            gather_subpops: config.gather_subpops,
            log,
            probe,
            running: vec![],
            pooled: RunningBest::default(),
            last_time: 0,
            last_usage: 0,
        })
    }

    /// Creates a new instance of `ShortStatistics` which writes to configured destination and
    /// uses system resource counters.
    pub fn from_config(config: &StatisticsConfig) -> GenericResult<Self> {
        config.validate()?;

        Self::new(config, StatisticsLog::from_config(config)?, Box::<SystemProbe>::default())
    }

    /// Returns running statistics per subpopulation. Empty until initialization is finished.
    pub fn running(&self) -> &[RunningBest] {
        self.running.as_slice()
    }

    /// Returns the best candidate seen so far across all subpopulations.
    pub fn pooled_best_so_far(&self) -> Option<&Candidate> {
        self.pooled.best()
    }

    fn is_sampled(&self, generation: usize) -> bool {
        generation % self.modulus == 0
    }

    fn is_breeding_sampled(&self, generation: usize) -> bool {
        generation % self.modulus == self.modulus - 1
    }

    fn mark_resources(&mut self) {
        self.last_time = self.probe.elapsed_millis();
        self.last_usage = self.probe.memory_usage();
    }

    fn print_resources(&mut self) -> GenericResult<()> {
        let time = self.probe.elapsed_millis() - self.last_time;
        let usage = self.probe.memory_usage() - self.last_usage;

        self.log.print(time)?;
        self.log.print(usage)
    }
}

impl Statistics for ShortStatistics {
    fn pre_initialization(&mut self, state: &RunState) -> GenericResult<()> {
        if self.is_sampled(state.generation) && self.gather_full {
            self.mark_resources();
        }

        Ok(())
    }

    fn post_initialization(&mut self, state: &RunState) -> GenericResult<()> {
        // the amount of subpopulations is known only after initialization
        self.running = vec![RunningBest::default(); state.population.subpops.len()];
        self.pooled = RunningBest::default();

        if self.is_sampled(state.generation) {
            self.log.print(state.generation)?;

            if self.gather_full {
                self.print_resources()?;
            }
        }

        Ok(())
    }

    fn pre_breeding(&mut self, state: &RunState) -> GenericResult<()> {
        if self.is_breeding_sampled(state.generation) && self.gather_full {
            self.mark_resources();
        }

        Ok(())
    }

    fn post_breeding(&mut self, state: &RunState) -> GenericResult<()> {
        // breeding output belongs to the line of the generation it produces
        if self.is_breeding_sampled(state.generation) {
            self.log.print(state.generation + 1)?;

            if self.gather_full {
                self.print_resources()?;
            }
        }

        Ok(())
    }

    fn pre_evaluation(&mut self, state: &RunState) -> GenericResult<()> {
        if self.is_sampled(state.generation) && self.gather_full {
            self.mark_resources();
        }

        Ok(())
    }

    fn post_evaluation(&mut self, state: &RunState) -> GenericResult<()> {
        let population = state.population;

        if self.running.len() != population.subpops.len() {
            return Err(format!(
                "statistics track {} subpopulations, but population has {}",
                self.running.len(),
                population.subpops.len()
            )
            .into());
        }

        let output = self.is_sampled(state.generation);

        if output && self.gather_full {
            self.print_resources()?;
        }

        let stats = GenerationStats::collect(population);

        stats.subpops.iter().zip(self.running.iter_mut()).for_each(|(summary, running)| {
            running.accumulate(summary.count, summary.total_size);
            running.offer(summary.best);
        });

        self.pooled.accumulate(stats.pooled.count, stats.pooled.total_size);
        self.pooled.offer(stats.pooled.best);

        if output {
            let log = &mut self.log;
            let running = self.running.as_slice();

            if self.gather_subpops {
                for (summary, running) in stats.subpops.iter().zip(running.iter()) {
                    write_summary(log, self.gather_full, summary, running.mean_size(), running.best())?;
                }
            }

            let pooled = &self.pooled;
            write_summary(log, self.gather_full, &stats.pooled, pooled.mean_size(), pooled.best())?;
            log.println()?;
        }

        Ok(())
    }

    fn finish(&mut self) -> GenericResult<()> {
        self.log.finish()
    }

    fn best_so_far(&self) -> Vec<Option<&Candidate>> {
        self.running.iter().map(|running| running.best()).collect()
    }
}

fn write_summary(
    log: &mut StatisticsLog,
    gather_full: bool,
    summary: &GenerationSummary,
    mean_size_so_far: Float,
    best_so_far: Option<&Candidate>,
) -> GenericResult<()> {
    if gather_full {
        log.print(summary.mean_size())?;
        log.print(mean_size_so_far)?;
    }

    log.print(summary.mean_fitness())?;
    log.print(summary.best_fitness())?;
    log.print(best_so_far.map_or(0., |best| best.fitness.value()))?;

    if gather_full {
        log.print(summary.best_size())?;
        log.print(best_so_far.map_or(0., |best| best.size() as Float))?;
    }

    Ok(())
}
