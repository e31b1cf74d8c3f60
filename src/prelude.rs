//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use codonring::prelude::*;
//!
//! let report = Scanner::new(ScanConfig::new(1)).unwrap().run();
//! assert_eq!(report.genotypes, 64);
//! ```

pub use crate::analysis::{classify, MutationEffect, NeighborhoodScan, Report, ScanTotals};
pub use crate::base::{Nucleotide, Sequence, SequenceSpace};
pub use crate::errors;
pub use crate::mutation::{double_variants, ring_pairs, single_variants};
pub use crate::scan::{ScanConfig, Scanner};
pub use crate::translate::{AminoAcid, Codon, GeneticCode, Peptide};
