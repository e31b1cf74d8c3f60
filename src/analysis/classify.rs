use std::fmt;

use crate::translate::Peptide;

/// Phenotypic effect of a substitution on the encoded peptide.
///
/// Exactly one effect holds for every (base, variant) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationEffect {
    /// The peptide is unchanged.
    Synonymous,
    /// At least one residue changed without gaining a premature stop.
    Missense,
    /// A stop appeared at a position where the base holds a residue.
    Nonsense,
}

impl fmt::Display for MutationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Synonymous => "synonymous",
            Self::Missense => "missense",
            Self::Nonsense => "nonsense",
        };
        write!(f, "{label}")
    }
}

/// Classify `variant` against `base`.
///
/// Synonymous if the peptides are equal; nonsense if any position holds a
/// non-stop residue in the base and a stop in the variant; missense
/// otherwise. A stop position in the base that stays a stop (or changes to
/// another stop codon's product) never counts as nonsense.
pub fn classify(base: &Peptide, variant: &Peptide) -> MutationEffect {
    if base == variant {
        MutationEffect::Synonymous
    } else if gains_stop(base, variant) {
        MutationEffect::Nonsense
    } else {
        MutationEffect::Missense
    }
}

/// True if `variant` holds a stop where `base` does not, scanning positions
/// up to the shorter of the two peptides.
fn gains_stop(base: &Peptide, variant: &Peptide) -> bool {
    base.as_slice()
        .iter()
        .zip(variant.as_slice())
        .any(|(b, v)| !b.is_stop() && v.is_stop())
}
