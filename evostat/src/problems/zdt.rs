#[cfg(test)]
#[path = "../../tests/unit/problems/zdt_test.rs"]
mod zdt_test;

use super::*;
use crate::models::{Direction, ParetoDominance};
use crate::utils::{Float, GenericError, GenericResult};
use std::f64::consts::PI;
use std::fmt::Write;
use std::sync::Arc;

/// A default amount of decision variables.
pub const DEFAULT_NUM_VARIABLES: usize = 30;

const TEN_PI: Float = 10. * PI;

/// Specifies a shape of the Pareto-optimal front through the `h` function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZdtVariant {
    /// Convex front: `h = 1 - sqrt(f1/g)`.
    Zdt1,
    /// Non-convex front: `h = 1 - (f1/g)^2`.
    Zdt2,
    /// Front consisting of several disconnected convex parts: `h = 1 - sqrt(f1/g) - (f1/g) sin(10 pi f1)`.
    #[default]
    Zdt3,
}

impl ZdtVariant {
    fn h(&self, f1: Float, g: Float) -> Float {
        let r = f1 / g;

        match self {
            ZdtVariant::Zdt1 => 1. - r.sqrt(),
            ZdtVariant::Zdt2 => 1. - r * r,
            ZdtVariant::Zdt3 => 1. - r.sqrt() - r * (TEN_PI * f1).sin(),
        }
    }
}

impl std::str::FromStr for ZdtVariant {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "zdt1" => Ok(ZdtVariant::Zdt1),
            "zdt2" => Ok(ZdtVariant::Zdt2),
            "zdt3" => Ok(ZdtVariant::Zdt3),
            _ => Err(format!("unknown zdt variant: '{value}'").into()),
        }
    }
}

/// A two-objective benchmark from the Zitzler-Deb-Thiele suite. Both objectives are minimized,
/// decision variables are bounded to [0, 1].
pub struct Zdt {
    variant: ZdtVariant,
    species: Species,
}

impl Zdt {
    /// Creates a new instance of `Zdt`. The amount of decision variables must be at least two.
    pub fn new(variant: ZdtVariant, num_variables: usize) -> GenericResult<Self> {
        if num_variables < 2 {
            return Err(format!("the number of variables must be an integer > 1, got {num_variables}").into());
        }

        let species = Species::new(num_variables, (0., 1.), 2, Arc::new(ParetoDominance::new(Direction::Minimize)))?;

        Ok(Self { variant, species })
    }

    /// Returns the variant.
    pub fn variant(&self) -> ZdtVariant {
        self.variant
    }

    /// Calculates objective values for given decision vector. The genome must conform to the
    /// species: see `Species::validate`.
    pub fn objectives(&self, genome: &[Float]) -> [Float; 2] {
        let num_variables = self.species.genome_size();
        debug_assert_eq!(genome.len(), num_variables, "genome size does not match species");

        let f1 = genome[0];
        let sum = genome.iter().take(num_variables).skip(1).sum::<Float>();
        let g = 1. + 9. * sum / (num_variables - 1) as Float;

        [f1, g * self.variant.h(f1, g)]
    }
}

impl Evaluable for Zdt {
    fn species(&self) -> &Species {
        &self.species
    }

    fn evaluate(&self, candidate: &mut Candidate) {
        if candidate.evaluated {
            return;
        }

        let objectives = self.objectives(candidate.genome.as_slice());
        candidate.fitness.set_objectives(&objectives);
        candidate.evaluated = true;
    }

    fn describe(&self, candidate: &Candidate) -> String {
        let mut report = String::new();

        let genome = candidate.genome.iter().map(|gene| format!("{gene:.6}")).collect::<Vec<_>>().join(" ");
        let _ = writeln!(
            report,
            "{:?} candidate (size: {}, evaluated: {})",
            self.variant,
            candidate.size(),
            candidate.evaluated
        );
        let _ = writeln!(report, "\tgenome: [{genome}]");

        if candidate.evaluated {
            let objectives =
                candidate.fitness.objectives().iter().map(|value| format!("{value:.6}")).collect::<Vec<_>>().join(", ");
            let _ = write!(report, "\tobjectives: ({objectives})");
        } else {
            let _ = write!(report, "\tobjectives: not evaluated");
        }

        report
    }
}
