use core::fmt;

use crate::errors::InvalidResidue;
use serde::{Deserialize, Serialize};

/// One amino acid residue or the stop signal.
///
/// Covers the 20 standard proteinogenic amino acids plus `Stop`. Displayed
/// as the one-letter code, with `*` for stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
}

impl AminoAcid {
    /// Return `true` for the stop signal.
    #[inline(always)]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }

    /// One-letter code; `*` for stop.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
            Self::Stop => '*',
        }
    }

    /// Parse a one-letter code (case-insensitive; `*` for stop).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ala),
            'R' => Some(Self::Arg),
            'N' => Some(Self::Asn),
            'D' => Some(Self::Asp),
            'C' => Some(Self::Cys),
            'Q' => Some(Self::Gln),
            'E' => Some(Self::Glu),
            'G' => Some(Self::Gly),
            'H' => Some(Self::His),
            'I' => Some(Self::Ile),
            'L' => Some(Self::Leu),
            'K' => Some(Self::Lys),
            'M' => Some(Self::Met),
            'F' => Some(Self::Phe),
            'P' => Some(Self::Pro),
            'S' => Some(Self::Ser),
            'T' => Some(Self::Thr),
            'W' => Some(Self::Trp),
            'Y' => Some(Self::Tyr),
            'V' => Some(Self::Val),
            '*' => Some(Self::Stop),
            _ => None,
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = InvalidResidue;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(InvalidResidue(c))
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amino_acid_is_stop() {
        assert!(AminoAcid::Stop.is_stop());
        assert!(!AminoAcid::Met.is_stop());
        assert!(!AminoAcid::Trp.is_stop());
    }

    #[test]
    fn test_amino_acid_char_roundtrip() {
        let all = [
            AminoAcid::Ala,
            AminoAcid::Arg,
            AminoAcid::Asn,
            AminoAcid::Asp,
            AminoAcid::Cys,
            AminoAcid::Gln,
            AminoAcid::Glu,
            AminoAcid::Gly,
            AminoAcid::His,
            AminoAcid::Ile,
            AminoAcid::Leu,
            AminoAcid::Lys,
            AminoAcid::Met,
            AminoAcid::Phe,
            AminoAcid::Pro,
            AminoAcid::Ser,
            AminoAcid::Thr,
            AminoAcid::Trp,
            AminoAcid::Tyr,
            AminoAcid::Val,
            AminoAcid::Stop,
        ];
        for aa in all {
            assert_eq!(AminoAcid::from_char(aa.to_char()), Some(aa));
        }
    }

    #[test]
    fn test_amino_acid_from_char_case_insensitive() {
        assert_eq!(AminoAcid::from_char('m'), Some(AminoAcid::Met));
        assert_eq!(AminoAcid::from_char('w'), Some(AminoAcid::Trp));
    }

    #[test]
    fn test_amino_acid_from_char_invalid() {
        assert_eq!(AminoAcid::from_char('B'), None);
        assert_eq!(AminoAcid::from_char('_'), None);
        assert!(AminoAcid::try_from('Z').is_err());
    }

    #[test]
    fn test_amino_acid_display() {
        assert_eq!(AminoAcid::Met.to_string(), "M");
        assert_eq!(AminoAcid::Stop.to_string(), "*");
    }
}
