//! Codon translation under the standard genetic code.
//!
//! A `Codon` indexes into the 64-entry `GeneticCode` table, mapping each
//! three-base unit of a ring `Sequence` to an `AminoAcid` of the encoded
//! `Peptide`.

mod amino_acid;
mod codon;
mod genetic_code;
mod peptide;

pub use amino_acid::AminoAcid;
pub use codon::Codon;
pub use genetic_code::GeneticCode;
pub use peptide::Peptide;
