#[cfg(test)]
#[path = "../../tests/unit/evolution/breeder_test.rs"]
mod breeder_test;

use super::*;
use crate::models::{Candidate, Subpopulation, pick_best};
use crate::utils::GenericResult;

/// A breeder which samples candidates uniformly within species bounds. Every generation keeps
/// the best `elites` evaluated candidates of each subpopulation and resamples the rest.
pub struct UniformBreeder {
    subpops: usize,
    size: usize,
    elites: usize,
}

impl UniformBreeder {
    /// Creates a new instance of `UniformBreeder`.
    pub fn new(subpops: usize, size: usize, elites: usize) -> GenericResult<Self> {
        if subpops == 0 || size == 0 {
            return Err(format!("subpopulations ({subpops}) and their size ({size}) must be positive").into());
        }

        if elites > size {
            return Err(format!("elites ({elites}) cannot exceed subpopulation size ({size})").into());
        }

        Ok(Self { subpops, size, elites })
    }

    fn sample(&self, amount: usize, species: &Species, random: &dyn Random) -> impl Iterator<Item = Candidate> {
        (0..amount).map(move |_| species.random_candidate(random))
    }
}

impl Breeder for UniformBreeder {
    fn initialize(&self, species: &Species, random: &dyn Random) -> Population {
        Population::new(
            (0..self.subpops)
                .map(|_| Subpopulation::new(self.sample(self.size, species, random).collect()))
                .collect(),
        )
    }

    fn breed(&self, population: &Population, species: &Species, random: &dyn Random) -> Population {
        Population::new(
            population
                .subpops
                .iter()
                .map(|subpop| {
                    let mut individuals = select_elites(subpop, self.elites);
                    individuals.extend(self.sample(self.size - individuals.len(), species, random));

                    Subpopulation::new(individuals)
                })
                .collect(),
        )
    }
}

/// Returns copies of up to `amount` best evaluated candidates.
fn select_elites(subpop: &Subpopulation, amount: usize) -> Vec<Candidate> {
    let mut remaining = subpop.evaluated().collect::<Vec<_>>();
    let mut elites = Vec::with_capacity(amount);

    while elites.len() < amount {
        let best = remaining.iter().fold(None, |best, candidate| pick_best(best, Some(*candidate)));
        let Some(best) = best else { break };

        elites.push(best.deep_copy());
        remaining.retain(|candidate| !std::ptr::eq(*candidate, best));
    }

    elites
}
