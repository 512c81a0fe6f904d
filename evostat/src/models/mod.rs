//! Contains the data model shared by evaluation and statistics: candidates, their fitness and
//! the populations they live in.

mod candidate;
pub use self::candidate::*;

mod fitness;
pub use self::fitness::*;

mod population;
pub use self::population::*;

mod species;
pub use self::species::*;
