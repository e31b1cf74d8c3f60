use std::fmt;

use serde::Serialize;

use super::accessibility::ScanTotals;
use crate::scan::ScanConfig;

/// Final aggregated statistics of one whole scan.
///
/// Derived once from the `ScanTotals` after enumeration completes.
/// `Serialize` so consumers can persist it; `Display` prints the
/// human-readable report block.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Ring length in codons.
    pub codons: usize,

    /// Base sequences enumerated, and the theoretical space size 4^(3c).
    pub genotypes: u64,
    pub genotypes_expected: u64,

    /// Single-substitution variants considered vs 4^(3c) * 3c * 3.
    pub considered_single: u64,
    pub considered_single_expected: u64,

    /// Double-substitution variants considered vs 4^(3c) * 3c * 9.
    pub considered_double: u64,
    pub considered_double_expected: u64,

    /// Fraction of double variants whose peptide no single substitution of
    /// the same base reaches.
    pub double_only_fraction: f64,

    /// Mean per-codon-normalized accessible peptide counts.
    pub mean_single_access: f64,
    pub mean_double_access: f64,
    pub mean_double_only_access: f64,
    pub mean_single_only_access: f64,
    pub mean_shared_access: f64,

    /// Per-class fractions for single substitutions.
    pub single_nonsense_fraction: f64,
    pub single_synonymous_fraction: f64,
    pub single_nonsynonymous_fraction: f64,
    pub single_missense_fraction: f64,

    /// Per-class fractions for double substitutions.
    pub double_nonsense_fraction: f64,
    pub double_synonymous_fraction: f64,
    pub double_nonsynonymous_fraction: f64,
    pub double_missense_fraction: f64,

    /// Raw single-substitution class counts.
    pub single_missense: u64,
    pub single_nonsense: u64,
    pub single_synonymous: u64,

    /// Cross-check sums: per-class counts must add up to the considered
    /// totals.
    pub single_class_sum: u64,
    pub double_class_sum: u64,
}

impl Report {
    /// Derive the report from completed totals.
    ///
    /// The config is validated before any scan starts, so every
    /// denominator here is nonzero.
    pub fn from_totals(config: &ScanConfig, totals: &ScanTotals) -> Self {
        let genotypes = totals.genotypes as f64;
        let single_class_sum =
            totals.single_synonymous + totals.single_missense + totals.single_nonsense;
        let double_class_sum =
            totals.double_synonymous + totals.double_missense + totals.double_nonsense;

        Self {
            codons: config.codons,
            genotypes: totals.genotypes,
            genotypes_expected: config.genotypes_expected(),
            considered_single: totals.considered_single,
            considered_single_expected: config.single_variants_expected(),
            considered_double: totals.considered_double,
            considered_double_expected: config.double_variants_expected(),

            double_only_fraction: totals.double_only_accessible as f64
                / totals.considered_double as f64,

            mean_single_access: totals.single_access / genotypes,
            mean_double_access: totals.double_access / genotypes,
            mean_double_only_access: totals.double_only_access / genotypes,
            mean_single_only_access: totals.single_only_access / genotypes,
            mean_shared_access: totals.shared_access / genotypes,

            single_nonsense_fraction: totals.single_nonsense as f64 / single_class_sum as f64,
            single_synonymous_fraction: totals.single_synonymous as f64
                / totals.considered_single as f64,
            single_nonsynonymous_fraction: (totals.single_missense + totals.single_nonsense)
                as f64
                / single_class_sum as f64,
            single_missense_fraction: totals.single_missense as f64 / single_class_sum as f64,

            double_nonsense_fraction: totals.double_nonsense as f64 / double_class_sum as f64,
            double_synonymous_fraction: totals.double_synonymous as f64
                / totals.considered_double as f64,
            double_nonsynonymous_fraction: (totals.double_missense + totals.double_nonsense)
                as f64
                / double_class_sum as f64,
            double_missense_fraction: totals.double_missense as f64 / double_class_sum as f64,

            single_missense: totals.single_missense,
            single_nonsense: totals.single_nonsense,
            single_synonymous: totals.single_synonymous,

            single_class_sum,
            double_class_sum,
        }
    }

    /// True if the considered totals match the per-class sums.
    pub fn sanity_holds(&self) -> bool {
        self.considered_single == self.single_class_sum
            && self.considered_double == self.double_class_sum
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "------------------------------------------";

        writeln!(f, "Final statistics:")?;
        writeln!(
            f,
            "Total genotypes considered: {}. Out of {}",
            self.genotypes, self.genotypes_expected
        )?;
        writeln!(
            f,
            "Total single nucleotide mutations considered: {}. Out of {}",
            self.considered_single, self.considered_single_expected
        )?;
        writeln!(
            f,
            "Total double nucleotide mutations considered: {}. Out of {}",
            self.considered_double, self.considered_double_expected
        )?;

        writeln!(f)?;
        writeln!(f, "P_inac = {}", self.double_only_fraction)?;

        writeln!(f)?;
        writeln!(
            f,
            "Amino acid sequences accessible by SN mutation: {}",
            self.mean_single_access
        )?;
        writeln!(
            f,
            "Amino acid sequences accessible by DN mutation: {}",
            self.mean_double_access
        )?;
        writeln!(
            f,
            "Amino acid sequences only accessible by DN mutation: {}",
            self.mean_double_only_access
        )?;
        writeln!(
            f,
            "Amino acid sequences only accessible by SN mutation: {}",
            self.mean_single_only_access
        )?;
        writeln!(
            f,
            "Amino acid sequences accessible by SN and DN mutation: {}",
            self.mean_shared_access
        )?;

        writeln!(f)?;
        writeln!(
            f,
            "Fraction of nonsense mutations (SN): {}",
            self.single_nonsense_fraction
        )?;
        writeln!(
            f,
            "Fraction of nonsense mutations (DN): {}",
            self.double_nonsense_fraction
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Fraction of synonymous mutations (SN): {}",
            self.single_synonymous_fraction
        )?;
        writeln!(
            f,
            "Fraction of synonymous mutations (DN): {}",
            self.double_synonymous_fraction
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Fraction of nonsynonymous mutations (SN): {}",
            self.single_nonsynonymous_fraction
        )?;
        writeln!(
            f,
            "Fraction of nonsynonymous mutations (DN): {}",
            self.double_nonsynonymous_fraction
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Fraction of missense mutations (SN): {}",
            self.single_missense_fraction
        )?;
        writeln!(
            f,
            "Fraction of missense mutations (DN): {}",
            self.double_missense_fraction
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Counter missense mutations (SN): {}", self.single_missense)?;
        writeln!(f, "Counter nonsense mutations (SN): {}", self.single_nonsense)?;
        writeln!(
            f,
            "Counter synonymous mutations (SN): {}",
            self.single_synonymous
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Sanity check")?;
        writeln!(
            f,
            "counter_all_SN: {}, syn+mis+non: {}",
            self.considered_single, self.single_class_sum
        )?;
        writeln!(
            f,
            "counter_all_DN: {}, syn+mis+non: {}",
            self.considered_double, self.double_class_sum
        )?;

        Ok(())
    }
}
