#[cfg(test)]
#[path = "../../tests/unit/statistics/generation_test.rs"]
mod generation_test;

use super::running::mean;
use crate::models::{Candidate, Population, Subpopulation, pick_best};
use crate::utils::Float;

/// Aggregates of evaluated candidates within one generation: either a single subpopulation or
/// the whole population.
#[derive(Clone, Debug, Default)]
pub struct GenerationSummary<'a> {
    /// Amount of evaluated candidates.
    pub count: u64,
    /// Total size of evaluated candidates.
    pub total_size: u64,
    /// Total fitness value of evaluated candidates.
    pub total_fitness: Float,
    /// The best evaluated candidate, if any.
    pub best: Option<&'a Candidate>,
}

impl<'a> GenerationSummary<'a> {
    /// Scans evaluated candidates of the subpopulation.
    pub fn collect(subpop: &'a Subpopulation) -> Self {
        subpop.evaluated().fold(Self::default(), |mut summary, candidate| {
            summary.count += 1;
            summary.total_size += candidate.size() as u64;
            summary.total_fitness += candidate.fitness.value();
            summary.best = pick_best(summary.best, Some(candidate));

            summary
        })
    }

    /// Returns mean fitness value, zero if nothing was evaluated.
    pub fn mean_fitness(&self) -> Float {
        mean(self.total_fitness, self.count)
    }

    /// Returns mean size, zero if nothing was evaluated.
    pub fn mean_size(&self) -> Float {
        mean(self.total_size as Float, self.count)
    }

    /// Returns fitness value of the best candidate, zero if undefined.
    pub fn best_fitness(&self) -> Float {
        self.best.map_or(0., |best| best.fitness.value())
    }

    /// Returns size of the best candidate, zero if undefined.
    pub fn best_size(&self) -> Float {
        self.best.map_or(0., |best| best.size() as Float)
    }
}

/// Statistics of one generation. It is recalculated from scratch every generation.
#[derive(Clone, Debug, Default)]
pub struct GenerationStats<'a> {
    /// Per subpopulation summaries.
    pub subpops: Vec<GenerationSummary<'a>>,
    /// Population-wide summary built from per subpopulation summaries.
    pub pooled: GenerationSummary<'a>,
}

impl<'a> GenerationStats<'a> {
    /// Scans all subpopulations of the population.
    pub fn collect(population: &'a Population) -> Self {
        let subpops = population.subpops.iter().map(GenerationSummary::collect).collect::<Vec<_>>();

        let pooled = subpops.iter().fold(GenerationSummary::default(), |mut pooled, summary| {
            pooled.count += summary.count;
            pooled.total_size += summary.total_size;
            pooled.total_fitness += summary.total_fitness;
            pooled.best = pick_best(pooled.best, summary.best);

            pooled
        });

        Self { subpops, pooled }
    }
}
