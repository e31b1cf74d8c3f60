//! Substitution variant generation.
//!
//! Produces every single-nucleotide and ring-adjacent double-nucleotide
//! variant of a base sequence, lazily and deterministically. Variants are
//! never composed: each one differs from the unmutated base in exactly one
//! (single) or exactly two (double) positions.

mod sites;
mod variants;

pub use sites::ring_pairs;
pub use variants::{double_variants, single_variants, DoubleVariants, SingleVariants};
