#[cfg(test)]
#[path = "../../tests/unit/models/species_test.rs"]
mod species_test;

use crate::models::{Candidate, Dominance, Fitness};
use crate::utils::{Float, GenericResult, Random};
use std::sync::Arc;

/// Describes the shape of candidates: decision vector length, per-gene bounds and objectives.
///
/// A species is fixed at setup time, before the first candidate is created or evaluated.
#[derive(Clone)]
pub struct Species {
    genome_size: usize,
    min_gene: Float,
    max_gene: Float,
    num_objectives: usize,
    dominance: Arc<dyn Dominance>,
}

impl Species {
    /// Creates a new instance of `Species`.
    pub fn new(
        genome_size: usize,
        bounds: (Float, Float),
        num_objectives: usize,
        dominance: Arc<dyn Dominance>,
    ) -> GenericResult<Self> {
        let (min_gene, max_gene) = bounds;

        if genome_size == 0 {
            return Err("genome size must be positive".into());
        }

        if !min_gene.is_finite() || !max_gene.is_finite() || min_gene > max_gene {
            return Err(format!("invalid gene bounds: [{min_gene}, {max_gene}]").into());
        }

        if num_objectives == 0 {
            return Err("number of objectives must be positive".into());
        }

        Ok(Self { genome_size, min_gene, max_gene, num_objectives, dominance })
    }

    /// Returns decision vector length.
    pub fn genome_size(&self) -> usize {
        self.genome_size
    }

    /// Returns lower and upper gene bounds.
    pub fn bounds(&self) -> (Float, Float) {
        (self.min_gene, self.max_gene)
    }

    /// Returns amount of objectives.
    pub fn num_objectives(&self) -> usize {
        self.num_objectives
    }

    /// Creates an unevaluated candidate with the given genome.
    pub fn new_candidate(&self, genome: Vec<Float>) -> GenericResult<Candidate> {
        self.validate(genome.as_slice())?;

        Ok(Candidate::new(genome, Fitness::new(self.num_objectives, self.dominance.clone())))
    }

    /// Creates an unevaluated candidate with genes sampled uniformly within bounds.
    pub fn random_candidate(&self, random: &dyn Random) -> Candidate {
        let genome = (0..self.genome_size).map(|_| random.uniform_real(self.min_gene, self.max_gene)).collect();

        Candidate::new(genome, Fitness::new(self.num_objectives, self.dominance.clone()))
    }

    /// Checks that the genome has expected length and all genes are within bounds.
    pub fn validate(&self, genome: &[Float]) -> GenericResult<()> {
        if genome.len() != self.genome_size {
            return Err(format!("expected genome of size {}, got {}", self.genome_size, genome.len()).into());
        }

        match genome.iter().position(|gene| !(self.min_gene..=self.max_gene).contains(gene)) {
            Some(idx) => Err(format!(
                "gene {idx} with value {} is outside of [{}, {}]",
                genome[idx], self.min_gene, self.max_gene
            )
            .into()),
            None => Ok(()),
        }
    }
}
