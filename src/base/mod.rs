//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides
//! and ring sequences, plus the lazy enumerator of the full sequence space.

mod nucleotide;
mod sequence;

pub use nucleotide::Nucleotide;
pub use sequence::{Sequence, SequenceSpace};
