use crate::models::Fitness;
use crate::utils::Float;

/// One point in the search space: a decision vector, its fitness and evaluation status.
///
/// Objective values are meaningful only when `evaluated` is set.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// A decision vector.
    pub genome: Vec<Float>,
    /// A fitness judgment.
    pub fitness: Fitness,
    /// True if fitness holds objectives of the current genome.
    pub evaluated: bool,
}

impl Candidate {
    /// Creates a new unevaluated candidate.
    pub fn new(genome: Vec<Float>, fitness: Fitness) -> Self {
        Self { genome, fitness, evaluated: false }
    }

    /// Returns the candidate size used in size statistics, which is the decision vector length.
    pub fn size(&self) -> usize {
        self.genome.len()
    }

    /// Returns an independent copy of the candidate.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

/// Picks the challenger only when there is no incumbent or the challenger is strictly better.
pub fn pick_best<'a>(incumbent: Option<&'a Candidate>, challenger: Option<&'a Candidate>) -> Option<&'a Candidate> {
    match (incumbent, challenger) {
        (Some(incumbent), Some(challenger)) if challenger.fitness.better_than(&incumbent.fitness) => Some(challenger),
        (Some(incumbent), _) => Some(incumbent),
        (None, challenger) => challenger,
    }
}
