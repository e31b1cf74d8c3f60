use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Scan parameters.
///
/// A single knob: the ring length in codons. It fixes the enumeration
/// space at 4^(3·codons) base sequences and must be small enough for that
/// space to be tractable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Ring length in codons.
    pub codons: usize,
}

impl ScanConfig {
    /// Create a config for a ring of `codons` codons.
    pub fn new(codons: usize) -> Self {
        Self { codons }
    }

    /// Reject configurations the scan cannot run with.
    ///
    /// A zero-codon ring has an empty enumeration space and would leave
    /// every report denominator zero; fail fast before any work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.codons == 0 {
            return Err(ConfigError::ZeroCodons);
        }
        Ok(())
    }

    /// Ring length in bases: 3 · codons.
    #[inline]
    pub fn ring_len(&self) -> usize {
        self.codons * 3
    }

    /// Theoretical number of base sequences: 4^(3·codons).
    pub fn genotypes_expected(&self) -> u64 {
        4u64.pow(self.ring_len() as u32)
    }

    /// Theoretical number of single-substitution variants over the whole
    /// space: 4^(3·codons) · 3·codons · 3.
    pub fn single_variants_expected(&self) -> u64 {
        self.genotypes_expected() * self.ring_len() as u64 * 3
    }

    /// Theoretical number of double-substitution variants over the whole
    /// space: 4^(3·codons) · 3·codons · 9.
    pub fn double_variants_expected(&self) -> u64 {
        self.genotypes_expected() * self.ring_len() as u64 * 9
    }
}

impl Default for ScanConfig {
    /// The reference configuration: a three-codon ring.
    fn default() -> Self {
        Self { codons: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validate() {
        assert!(ScanConfig::new(1).validate().is_ok());
        assert!(ScanConfig::new(3).validate().is_ok());
        assert_eq!(
            ScanConfig::new(0).validate().unwrap_err(),
            ConfigError::ZeroCodons
        );
    }

    #[test]
    fn test_config_ring_len() {
        assert_eq!(ScanConfig::new(1).ring_len(), 3);
        assert_eq!(ScanConfig::new(3).ring_len(), 9);
    }

    #[test]
    fn test_config_expected_counts() {
        let config = ScanConfig::new(1);
        assert_eq!(config.genotypes_expected(), 64);
        assert_eq!(config.single_variants_expected(), 64 * 3 * 3);
        assert_eq!(config.double_variants_expected(), 64 * 3 * 9);

        let config = ScanConfig::new(3);
        assert_eq!(config.genotypes_expected(), 262_144);
        assert_eq!(config.single_variants_expected(), 262_144 * 9 * 3);
        assert_eq!(config.double_variants_expected(), 262_144 * 9 * 9);
    }

    #[test]
    fn test_config_default_is_three_codons() {
        assert_eq!(ScanConfig::default().codons, 3);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ScanConfig::new(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
