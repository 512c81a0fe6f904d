#[cfg(test)]
#[path = "../../tests/unit/statistics/config_test.rs"]
mod config_test;

use crate::utils::GenericResult;
use std::path::PathBuf;

/// Controls what statistics are gathered and where they are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatisticsConfig {
    /// Output is produced every `modulus` generations. Default is 1.
    pub modulus: usize,
    /// Gathers timing, memory and size statistics. Default is false.
    pub gather_full: bool,
    /// Reports per subpopulation statistics. Default is false.
    pub gather_subpops: bool,
    /// A path to the statistics file, standard output is used when not set.
    pub file: Option<PathBuf>,
    /// Compresses the statistics file with gzip and appends `.gz` suffix to its name.
    pub gzip: bool,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self { modulus: 1, gather_full: false, gather_subpops: false, file: None, gzip: false }
    }
}

impl StatisticsConfig {
    /// Sets sampling modulus.
    pub fn with_modulus(mut self, modulus: usize) -> Self {
        self.modulus = modulus;
        self
    }

    /// Sets whether full statistics are gathered.
    pub fn with_full(mut self, gather_full: bool) -> Self {
        self.gather_full = gather_full;
        self
    }

    /// Sets whether per subpopulation statistics are reported.
    pub fn with_subpops(mut self, gather_subpops: bool) -> Self {
        self.gather_subpops = gather_subpops;
        self
    }

    /// Sets output file and its compression.
    pub fn with_file(mut self, file: Option<PathBuf>, gzip: bool) -> Self {
        self.file = file;
        self.gzip = gzip;
        self
    }

    /// Checks configuration consistency.
    pub fn validate(&self) -> GenericResult<()> {
        if self.modulus == 0 {
            return Err("statistics modulus must be a positive integer".into());
        }

        if self.gzip && self.file.is_none() {
            return Err("gzip compression requires a statistics file".into());
        }

        Ok(())
    }
}
