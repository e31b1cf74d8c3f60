use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use codonring::scan::{ScanConfig, Scanner};

/// Codonring: amino-acid accessibility of codon rings
///
/// Enumerates every nucleotide sequence of the configured ring length,
/// classifies all single and ring-adjacent double substitutions, and
/// reports how many distinct amino-acid sequences each mutation mode
/// can reach.
#[derive(Parser, Debug)]
#[command(name = "codonring")]
#[command(version, about = "Exhaustive amino-acid accessibility scan of codon rings", long_about = None)]
struct Cli {
    /// Ring length in codons
    #[arg(short, long, default_value_t = 3)]
    codons: usize,

    /// Render a progress bar instead of plain progress lines
    #[arg(long)]
    progress_bar: bool,

    /// Emit the final report as pretty JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scanner =
        Scanner::new(ScanConfig::new(cli.codons)).context("Invalid scan configuration")?;

    println!("Ring codons: {}", cli.codons);

    let report = if cli.progress_bar {
        let pb = ProgressBar::new(scanner.config().genotypes_expected());
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .expect("static progress template")
                .progress_chars("#>-"),
        );
        let report = scanner.run_with_progress(|count, _| pb.set_position(count));
        pb.finish_and_clear();
        report
    } else {
        scanner.run_with_progress(|count, elapsed| {
            println!("Progress: {count}, elapsed: {:.3}s", elapsed.as_secs_f64());
        })
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!();
        print!("{report}");
    }

    Ok(())
}
