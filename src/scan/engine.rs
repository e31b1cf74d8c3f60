use std::time::{Duration, Instant};

use super::ScanConfig;
use crate::analysis::{NeighborhoodScan, Report, ScanTotals};
use crate::base::SequenceSpace;
use crate::errors::ConfigError;
use crate::translate::GeneticCode;

/// Base sequences between progress callbacks.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Exhaustive scan driver.
///
/// Walks every base sequence of the configured space exactly once,
/// running the two-phase neighborhood scan for each, then derives the
/// final `Report`. Single-threaded and synchronous; the only observable
/// side channel is the progress callback.
#[derive(Debug)]
pub struct Scanner {
    config: ScanConfig,
    code: GeneticCode,
}

impl Scanner {
    /// Create a scanner, rejecting unusable configurations up front.
    pub fn new(config: ScanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            code: GeneticCode::STANDARD,
        })
    }

    /// The validated configuration this scanner runs with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the scan without progress reporting.
    pub fn run(&self) -> Report {
        self.run_with_progress(|_, _| {})
    }

    /// Run the scan, invoking `progress` with the number of base sequences
    /// processed and the elapsed time after every [`PROGRESS_INTERVAL`]
    /// sequences.
    pub fn run_with_progress<F>(&self, mut progress: F) -> Report
    where
        F: FnMut(u64, Duration),
    {
        let start = Instant::now();
        let mut totals = ScanTotals::new();
        let space = SequenceSpace::new(self.config.codons);

        for base in space.iter() {
            totals.genotypes += 1;

            NeighborhoodScan::new(&self.code, &base)
                .scan_single(&mut totals)
                .scan_double(&mut totals);

            if totals.genotypes % PROGRESS_INTERVAL == 0 {
                progress(totals.genotypes, start.elapsed());
            }
        }

        Report::from_totals(&self.config, &totals)
    }
}
