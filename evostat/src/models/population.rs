use crate::models::Candidate;

/// An ordered collection of candidates which shares one set of best-so-far statistics.
#[derive(Clone, Debug, Default)]
pub struct Subpopulation {
    /// Candidates of the subpopulation.
    pub individuals: Vec<Candidate>,
}

impl Subpopulation {
    /// Creates a new instance of `Subpopulation`.
    pub fn new(individuals: Vec<Candidate>) -> Self {
        Self { individuals }
    }

    /// Returns an iterator over evaluated candidates.
    pub fn evaluated(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.individuals.iter().filter(|candidate| candidate.evaluated)
    }
}

/// A population which consists of one or more subpopulations.
#[derive(Clone, Debug, Default)]
pub struct Population {
    /// Subpopulations, indexed from zero.
    pub subpops: Vec<Subpopulation>,
}

impl Population {
    /// Creates a new instance of `Population`.
    pub fn new(subpops: Vec<Subpopulation>) -> Self {
        Self { subpops }
    }

    /// Returns total amount of candidates.
    pub fn size(&self) -> usize {
        self.subpops.iter().map(|subpop| subpop.individuals.len()).sum()
    }

    /// Returns all candidates across subpopulations.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.subpops.iter().flat_map(|subpop| subpop.individuals.iter())
    }
}
