//! Display functions for command results

use super::formatters::{join_letters, score_bar};
use crate::commands::SearchReport;
use colored::Colorize;

const BAR_WIDTH: usize = 20;

/// Print the header announcing the searched letters
pub fn print_search_header(letters: &[char]) {
    println!(
        "Search words that best match: {}",
        join_letters(letters, ", ").bright_yellow().bold()
    );
}

/// Print the result of a search
pub fn print_search_result(report: &SearchReport) {
    if report.is_empty() {
        println!(
            "{}",
            format!(
                "No word with a minimum size of {} has been found containing all the letters below:",
                report.min_length
            )
            .red()
        );
        println!(
            "List of searched letters: {}",
            join_letters(&report.letters, " - ")
        );
    }

    println!(
        "{} words of at least {} eligible letters have been found!",
        report.total_matches.to_string().green().bold(),
        report.min_length
    );

    if report.is_empty() {
        return;
    }

    println!("\n{}", format!("Top {} matches:", report.top.len()).bright_cyan().bold());

    let best = report.best_score().unwrap_or(0);
    let width = report
        .top
        .iter()
        .map(|m| m.word.chars().count())
        .max()
        .unwrap_or(0);

    for m in &report.top {
        println!(
            "- {:<width$} (score: {}) {}",
            m.word,
            format!("{:>3}", m.score).bright_yellow(),
            score_bar(m.score, best, BAR_WIDTH).green()
        );
    }

    println!(
        "\n{}",
        format!("Searched in {:.2}s", report.duration.as_secs_f64()).bright_black()
    );
}
