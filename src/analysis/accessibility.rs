use std::collections::HashSet;

use super::classify::{classify, MutationEffect};
use crate::base::Sequence;
use crate::mutation::{double_variants, single_variants};
use crate::translate::{GeneticCode, Peptide};

/// Running totals over one whole scan.
///
/// Owned by the scan driver and threaded through every per-base
/// neighborhood scan. Counters start at zero and only ever increase; the
/// report reads them once after enumeration ends. The `*_access` fields
/// are per-codon-normalized running sums: each base sequence contributes
/// its set measure divided by the codon count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanTotals {
    /// Base sequences enumerated.
    pub genotypes: u64,
    /// Single-substitution variants considered.
    pub considered_single: u64,
    /// Double-substitution variants considered.
    pub considered_double: u64,

    pub single_synonymous: u64,
    pub single_missense: u64,
    pub single_nonsense: u64,
    pub double_synonymous: u64,
    pub double_missense: u64,
    pub double_nonsense: u64,

    /// Double variants whose peptide is absent from the same base's
    /// completed single-substitution reachability set.
    pub double_only_accessible: u64,

    /// Sum over bases of (|single-reachable| - 1) / codons.
    pub single_access: f64,
    /// Sum over bases of (|double-reachable| - 1) / codons.
    pub double_access: f64,
    /// Sum over bases of |double-reachable \ single-reachable| / codons.
    pub double_only_access: f64,
    /// Sum over bases of |single-reachable \ double-reachable| / codons.
    pub single_only_access: f64,
    /// Sum over bases of |single-reachable ∩ double-reachable| / codons.
    pub shared_access: f64,
}

impl ScanTotals {
    /// Fresh, zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    fn record_single(&mut self, effect: MutationEffect) {
        self.considered_single += 1;
        match effect {
            MutationEffect::Synonymous => self.single_synonymous += 1,
            MutationEffect::Missense => self.single_missense += 1,
            MutationEffect::Nonsense => self.single_nonsense += 1,
        }
    }

    fn record_double(&mut self, effect: MutationEffect) {
        self.considered_double += 1;
        match effect {
            MutationEffect::Synonymous => self.double_synonymous += 1,
            MutationEffect::Missense => self.double_missense += 1,
            MutationEffect::Nonsense => self.double_nonsense += 1,
        }
    }
}

/// Two-phase scan of one base sequence's substitution neighborhood.
///
/// Phase ordering is part of the contract: the single-substitution pass
/// must complete before the double-substitution pass, because the double
/// pass checks each variant peptide against the finished single-reachable
/// set. The API enforces this: `scan_single` consumes the scan and returns
/// a [`SinglePhaseDone`] value, the only type on which `scan_double` exists.
#[derive(Debug)]
pub struct NeighborhoodScan<'a> {
    code: &'a GeneticCode,
    base: &'a Sequence,
    base_peptide: Peptide,
}

impl<'a> NeighborhoodScan<'a> {
    /// Translate `base` once and seed the scan.
    pub fn new(code: &'a GeneticCode, base: &'a Sequence) -> Self {
        let base_peptide = code.translate(base);
        Self {
            code,
            base,
            base_peptide,
        }
    }

    /// The unmutated peptide this scan classifies against.
    pub fn base_peptide(&self) -> &Peptide {
        &self.base_peptide
    }

    /// Phase 1: classify every single-substitution variant and build the
    /// single-reachable peptide set (seeded with the base peptide).
    pub fn scan_single(self, totals: &mut ScanTotals) -> SinglePhaseDone<'a> {
        let mut single_reachable = HashSet::new();
        single_reachable.insert(self.base_peptide.clone());

        for variant in single_variants(self.base) {
            let peptide = self.code.translate(&variant);
            totals.record_single(classify(&self.base_peptide, &peptide));
            single_reachable.insert(peptide);
        }

        SinglePhaseDone {
            code: self.code,
            base: self.base,
            base_peptide: self.base_peptide,
            single_reachable,
        }
    }
}

/// A neighborhood scan whose single-substitution phase has completed.
///
/// Holds the finished single-reachable set, consumed read-only by the
/// double-substitution phase.
#[derive(Debug)]
pub struct SinglePhaseDone<'a> {
    code: &'a GeneticCode,
    base: &'a Sequence,
    base_peptide: Peptide,
    single_reachable: HashSet<Peptide>,
}

impl SinglePhaseDone<'_> {
    /// Peptides reachable by single substitution (including the base).
    pub fn single_reachable(&self) -> &HashSet<Peptide> {
        &self.single_reachable
    }

    /// Phase 2: classify every double-substitution variant, build the
    /// double-reachable set, count double-only-accessible peptides against
    /// the completed single set, then fold this base's set measures into
    /// `totals`.
    pub fn scan_double(self, totals: &mut ScanTotals) {
        let mut double_reachable = HashSet::new();
        double_reachable.insert(self.base_peptide.clone());

        for variant in double_variants(self.base) {
            let peptide = self.code.translate(&variant);
            totals.record_double(classify(&self.base_peptide, &peptide));

            if !self.single_reachable.contains(&peptide) {
                totals.double_only_accessible += 1;
            }
            double_reachable.insert(peptide);
        }

        let codons = self.base.codons() as f64;
        let single = &self.single_reachable;
        let double = &double_reachable;

        // The base peptide is a member of both sets: the -1 terms exclude
        // it from the plain accessibility sums, the difference counts
        // exclude it implicitly, and the intersection count includes it.
        totals.single_access += (single.len() - 1) as f64 / codons;
        totals.double_access += (double.len() - 1) as f64 / codons;
        totals.double_only_access += double.difference(single).count() as f64 / codons;
        totals.single_only_access += single.difference(double).count() as f64 / codons;
        totals.shared_access += single.intersection(double).count() as f64 / codons;
    }
}
