// Colored terminal rendering for comparison reports and counters.
//
// This module handles all terminal-specific formatting. The main.rs
// display logic delegates here.

use colored::Colorize;

use crate::stats::StatsReport;

use super::format_percent;

/// One finished comparison, ready for display.
pub struct ComparisonReport {
    /// Per-algorithm scores in registration order; None marks an algorithm
    /// that failed and was dropped from the ensemble.
    pub scores: Vec<(String, Option<f64>)>,
    pub ensemble: f64,
    pub threshold: f64,
}

/// Display the per-algorithm breakdown and the ensemble verdict.
pub fn display_comparison(report: &ComparisonReport) {
    println!("\n{}", "=== Similarity Report ===".bold());
    for (name, score) in &report.scores {
        match score {
            Some(value) => println!(
                "  {:<22} {:>8.4}  ({})",
                name,
                value,
                format_percent(*value)
            ),
            None => println!("  {:<22} {}", name, "failed".dimmed()),
        }
    }
    println!("  {}", "-".repeat(44).dimmed());
    println!(
        "  {:<22} {:>8.4}  ({})",
        "Ensemble",
        report.ensemble,
        format_percent(report.ensemble)
    );

    let verdict = if report.ensemble >= report.threshold {
        "LIKELY PLAGIARISM".red().bold()
    } else {
        "below threshold".green()
    };
    println!(
        "\n  Verdict: {} (threshold {:.2})\n",
        verdict, report.threshold
    );
}

/// Display a single-algorithm score.
pub fn display_single(name: &str, score: f64) {
    println!("{name}: {score:.4} ({})", format_percent(score));
}

/// List algorithm names in registration order.
pub fn display_algorithms(names: &[&str]) {
    println!("{}", "Registered similarity algorithms:".bold());
    for (i, name) in names.iter().enumerate() {
        println!("  {}. {name}", i + 1);
    }
}

/// Display recorded per-algorithm execution counters.
pub fn display_stats(report: &StatsReport) {
    println!("\n{}", "=== Algorithm Timings ===".bold());
    println!("  collecting since {}", report.collecting_since);
    println!(
        "  {:<22} {:>7} {:>9} {:>12} {:>12}",
        "Algorithm".dimmed(),
        "Calls".dimmed(),
        "Failures".dimmed(),
        "Total (us)".dimmed(),
        "Avg (us)".dimmed(),
    );
    for algorithm in &report.algorithms {
        println!(
            "  {:<22} {:>7} {:>9} {:>12} {:>12.1}",
            algorithm.name,
            algorithm.calls,
            algorithm.failures,
            algorithm.total_micros,
            algorithm.avg_micros,
        );
    }
    println!();
}
