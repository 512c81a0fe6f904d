//! Specifies fitness judgment and dominance relations between objective vectors.

#[cfg(test)]
#[path = "../../tests/unit/models/fitness_test.rs"]
mod fitness_test;

use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Decides whether one objective vector is strictly better than another one.
///
/// Implementations must be strict: an objective vector is never better than itself, so ties
/// always keep the incumbent.
pub trait Dominance: Send + Sync {
    /// Returns true if `a` is strictly better than `b`.
    fn better_than(&self, a: &[Float], b: &[Float]) -> bool;
}

/// Specifies optimization direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Bigger values are better.
    Maximize,
    /// Smaller values are better.
    Minimize,
}

impl Direction {
    /// Orders two values so that `Ordering::Less` means `a` is better than `b`.
    pub fn order(&self, a: Float, b: Float) -> Ordering {
        match self {
            Direction::Maximize => compare_floats(b, a),
            Direction::Minimize => compare_floats(a, b),
        }
    }
}

/// Compares the first objective only.
pub struct ScalarOrder {
    direction: Direction,
}

impl ScalarOrder {
    /// Creates a new instance of `ScalarOrder`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Dominance for ScalarOrder {
    fn better_than(&self, a: &[Float], b: &[Float]) -> bool {
        match (a.first(), b.first()) {
            (Some(a), Some(b)) => self.direction.order(*a, *b) == Ordering::Less,
            _ => false,
        }
    }
}

/// Pareto dominance: `a` is better than `b` when it is not worse in any objective and strictly
/// better in at least one.
pub struct ParetoDominance {
    direction: Direction,
}

impl ParetoDominance {
    /// Creates a new instance of `ParetoDominance`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Dominance for ParetoDominance {
    fn better_than(&self, a: &[Float], b: &[Float]) -> bool {
        dominance_order(a, b, self.direction) == Ordering::Less
    }
}

/// Weighted scalarization of all objectives.
pub struct WeightedSum {
    weights: Vec<Float>,
    direction: Direction,
}

impl WeightedSum {
    /// Creates a new instance of `WeightedSum`.
    pub fn new(weights: Vec<Float>, direction: Direction) -> Self {
        Self { weights, direction }
    }

    fn scalarize(&self, objectives: &[Float]) -> Float {
        self.weights.iter().zip(objectives.iter()).map(|(weight, value)| weight * value).sum()
    }
}

impl Dominance for WeightedSum {
    fn better_than(&self, a: &[Float], b: &[Float]) -> bool {
        self.direction.order(self.scalarize(a), self.scalarize(b)) == Ordering::Less
    }
}

/// Calculates dominance order of two objective vectors: `Less` when `a` dominates `b`,
/// `Greater` when `b` dominates `a` and `Equal` when neither dominates.
pub fn dominance_order(a: &[Float], b: &[Float], direction: Direction) -> Ordering {
    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (a, b) in a.iter().zip(b.iter()) {
        match direction.order(*a, *b) {
            Ordering::Less => less_cnt += 1,
            Ordering::Greater => greater_cnt += 1,
            Ordering::Equal => {}
        }
    }

    if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// A fitness judgment: objective values together with the relation used to compare them.
#[derive(Clone)]
pub struct Fitness {
    objectives: Vec<Float>,
    dominance: Arc<dyn Dominance>,
}

impl Fitness {
    /// Creates a fitness with `size` zeroed objectives.
    pub fn new(size: usize, dominance: Arc<dyn Dominance>) -> Self {
        Self { objectives: vec![0.; size], dominance }
    }

    /// Returns objective values.
    pub fn objectives(&self) -> &[Float] {
        self.objectives.as_slice()
    }

    /// Overwrites objective values.
    pub fn set_objectives(&mut self, values: &[Float]) {
        self.objectives.clear();
        self.objectives.extend_from_slice(values);
    }

    /// Returns true if this fitness is strictly better than the other one.
    pub fn better_than(&self, other: &Fitness) -> bool {
        self.dominance.better_than(self.objectives(), other.objectives())
    }

    /// Returns a scalar summary of the fitness: the largest objective value.
    pub fn value(&self) -> Float {
        self.objectives.iter().copied().max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.)
    }
}

impl fmt::Debug for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fitness").field("objectives", &self.objectives).finish()
    }
}
