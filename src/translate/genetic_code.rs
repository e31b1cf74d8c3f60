use super::{AminoAcid, Codon, Peptide};
use crate::base::Sequence;

/// The standard genetic code (NCBI table 1).
///
/// A process-wide constant mapping every one of the 64 codons to a residue
/// or the stop signal. The table is indexed by `Codon::index()`, which is
/// total over the four-letter alphabet, so lookup cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct GeneticCode {
    table: &'static [AminoAcid; 64],
}

// Rows ordered by first base, columns by second and third (A, C, G, T).
const STANDARD_TABLE: [AminoAcid; 64] = {
    use AminoAcid::*;
    [
        // AAA..ATT
        Lys, Asn, Lys, Asn, Thr, Thr, Thr, Thr, Arg, Ser, Arg, Ser, Ile, Ile, Met, Ile,
        // CAA..CTT
        Gln, His, Gln, His, Pro, Pro, Pro, Pro, Arg, Arg, Arg, Arg, Leu, Leu, Leu, Leu,
        // GAA..GTT
        Glu, Asp, Glu, Asp, Ala, Ala, Ala, Ala, Gly, Gly, Gly, Gly, Val, Val, Val, Val,
        // TAA..TTT
        Stop, Tyr, Stop, Tyr, Ser, Ser, Ser, Ser, Stop, Cys, Trp, Cys, Leu, Phe, Leu, Phe,
    ]
};

impl GeneticCode {
    /// The standard code.
    pub const STANDARD: GeneticCode = GeneticCode {
        table: &STANDARD_TABLE,
    };

    /// Translate a single codon.
    #[inline(always)]
    pub fn translate_codon(&self, codon: Codon) -> AminoAcid {
        self.table[codon.index()]
    }

    /// Translate a sequence of 3k bases into a peptide of k residues,
    /// codon by codon.
    pub fn translate(&self, sequence: &Sequence) -> Peptide {
        debug_assert!(sequence.len() % 3 == 0);

        let mut peptide = Peptide::with_capacity(sequence.codons());
        for codon in sequence.as_slice().chunks_exact(3) {
            peptide.push(self.translate_codon(Codon::from_slice(codon)));
        }
        peptide
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::STANDARD
    }
}
