//! Contains the evaluation contract and benchmark problems implementing it.

use crate::models::{Candidate, Species};

mod zdt;
pub use self::zdt::*;

/// Maps a candidate's decision vector to its objective vector.
///
/// Implementations only touch the candidate passed in, so candidates of the same generation can
/// be evaluated concurrently.
pub trait Evaluable: Send + Sync {
    /// Returns the species which candidates of this problem must conform to.
    fn species(&self) -> &Species;

    /// Evaluates the candidate in place and marks it as evaluated. Does nothing if the candidate
    /// is already evaluated.
    fn evaluate(&self, candidate: &mut Candidate);

    /// Returns a human-readable report about the candidate.
    fn describe(&self, candidate: &Candidate) -> String;
}
