use std::str::FromStr;

use codonring::analysis::{classify, MutationEffect, NeighborhoodScan, ScanTotals};
use codonring::base::{Sequence, SequenceSpace};
use codonring::scan::{ScanConfig, Scanner};
use codonring::translate::{GeneticCode, Peptide};

#[test]
fn full_scan_single_codon_exact_totals() {
    let report = Scanner::new(ScanConfig::new(1)).unwrap().run();

    // 64 genotypes, 9 single and 27 double variants each.
    assert_eq!(report.genotypes, 64);
    assert_eq!(report.considered_single, 576);
    assert_eq!(report.considered_double, 1728);

    assert_eq!(report.genotypes, report.genotypes_expected);
    assert_eq!(report.considered_single, report.considered_single_expected);
    assert_eq!(report.considered_double, report.considered_double_expected);
}

#[test]
fn full_scan_sanity_invariant_all_sizes() {
    for codons in 1..=2 {
        let report = Scanner::new(ScanConfig::new(codons)).unwrap().run();
        assert!(report.sanity_holds(), "codons = {codons}");
        assert_eq!(
            report.single_missense + report.single_nonsense + report.single_synonymous,
            report.considered_single,
            "codons = {codons}"
        );
    }
}

#[test]
fn full_scan_scaling_law() {
    for codons in 1..=2 {
        let config = ScanConfig::new(codons);
        let report = Scanner::new(config).unwrap().run();
        let l = (codons * 3) as u64;
        let space = 4u64.pow(l as u32);

        assert_eq!(report.genotypes, space);
        assert_eq!(report.considered_single, space * l * 3);
        assert_eq!(report.considered_double, space * l * 9);
    }
}

#[test]
fn full_scan_fraction_bounds() {
    let report = Scanner::new(ScanConfig::new(1)).unwrap().run();
    assert!(report.mean_double_access > 0.0);
    assert!(report.mean_single_access > 0.0);
    assert!(report.double_only_fraction > 0.0);
    assert!(report.double_only_fraction < 1.0);
}

#[test]
fn start_codon_third_position_substitutions_are_missense_to_isoleucine() {
    let code = GeneticCode::STANDARD;
    let base = Sequence::from_str("ATG").unwrap();
    let base_peptide = code.translate(&base);
    assert_eq!(base_peptide.to_string(), "M");

    let mut missense = 0;
    for variant_str in ["ATA", "ATT", "ATC"] {
        let variant = Sequence::from_str(variant_str).unwrap();
        let peptide = code.translate(&variant);
        assert_eq!(peptide.to_string(), "I", "variant {variant_str}");
        assert_eq!(classify(&base_peptide, &peptide), MutationEffect::Missense);
        missense += 1;
    }
    assert_eq!(missense, 3);

    // The same three classifications land in the missense counter when the
    // neighborhood scan runs them.
    let mut totals = ScanTotals::new();
    NeighborhoodScan::new(&code, &base).scan_single(&mut totals);
    assert!(totals.single_missense >= 3);
}

#[test]
fn stop_base_stop_retaining_variants_are_synonymous() {
    let code = GeneticCode::STANDARD;
    let base = Sequence::from_str("TAA").unwrap();
    let base_peptide = code.translate(&base);
    assert!(base_peptide.as_slice()[0].is_stop());

    for variant_str in ["TAG", "TGA"] {
        let variant = Sequence::from_str(variant_str).unwrap();
        let peptide = code.translate(&variant);
        assert_eq!(
            classify(&base_peptide, &peptide),
            MutationEffect::Synonymous,
            "variant {variant_str}"
        );
    }

    // Nothing mutating away from a stop base can be nonsense.
    let mut totals = ScanTotals::new();
    NeighborhoodScan::new(&code, &base)
        .scan_single(&mut totals)
        .scan_double(&mut totals);
    assert_eq!(totals.single_nonsense, 0);
    assert_eq!(totals.double_nonsense, 0);
}

#[test]
fn reachable_sets_always_contain_base_peptide() {
    let code = GeneticCode::STANDARD;
    for base in SequenceSpace::new(1).iter() {
        let mut totals = ScanTotals::new();
        let scan = NeighborhoodScan::new(&code, &base);
        let base_peptide = scan.base_peptide().clone();
        let done = scan.scan_single(&mut totals);
        assert!(
            done.single_reachable().contains(&base_peptide),
            "base {base}"
        );
    }
}

#[test]
fn double_only_counter_bounded_by_double_variants() {
    let code = GeneticCode::STANDARD;
    for base in SequenceSpace::new(1).iter() {
        let mut totals = ScanTotals::new();
        NeighborhoodScan::new(&code, &base)
            .scan_single(&mut totals)
            .scan_double(&mut totals);
        assert!(
            totals.double_only_accessible <= totals.considered_double,
            "base {base}"
        );
    }
}

#[test]
fn double_only_counter_matches_manual_recount() {
    // Recompute the double-only count for one base by hand and compare.
    let code = GeneticCode::STANDARD;
    let base = Sequence::from_str("ATGAAA").unwrap();

    let mut totals = ScanTotals::new();
    NeighborhoodScan::new(&code, &base)
        .scan_single(&mut totals)
        .scan_double(&mut totals);

    let single_reachable: std::collections::HashSet<Peptide> =
        std::iter::once(code.translate(&base))
            .chain(codonring::mutation::single_variants(&base).map(|v| code.translate(&v)))
            .collect();

    let manual = codonring::mutation::double_variants(&base)
        .map(|v| code.translate(&v))
        .filter(|p| !single_reachable.contains(p))
        .count() as u64;

    assert_eq!(totals.double_only_accessible, manual);
}

#[test]
fn accessibility_sums_normalized_per_codon() {
    // For a two-codon base, each per-base contribution is divided by 2;
    // running a single neighborhood scan exposes the normalization.
    let code = GeneticCode::STANDARD;
    let base = Sequence::from_str("ATGAAA").unwrap();

    let mut totals = ScanTotals::new();
    let done = NeighborhoodScan::new(&code, &base).scan_single(&mut totals);
    let single_set_len = done.single_reachable().len();
    done.scan_double(&mut totals);

    let expected = (single_set_len - 1) as f64 / 2.0;
    assert!((totals.single_access - expected).abs() < 1e-12);
}
