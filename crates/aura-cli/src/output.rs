//! Terminal output formatting.

use aura_core::AnalysisResult;
use colored::Colorize;

/// Print an analysis result.
pub fn print_analysis(result: &AnalysisResult) {
    let sentiment = format!("{:.1}", result.sentiment);
    let label = if result.is_positive() {
        format!("{} (positive)", sentiment).green()
    } else {
        format!("{} (neutral)", sentiment).yellow()
    };

    println!("{}", "Text Analysis".bold());
    println!("{}", "─".repeat(40));
    println!("  Sentiment: {}", label);

    if result.keywords.is_empty() {
        println!("  Keywords:  {}", "none".dimmed());
    } else {
        println!("  Keywords:");
        for (i, keyword) in result.keywords.iter().enumerate() {
            println!("    {}. {}", i + 1, keyword.cyan());
        }
    }
    println!("{}", "─".repeat(40));
}
