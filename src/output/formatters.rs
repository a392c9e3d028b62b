//! Formatting utilities for terminal output

/// Join letters with a separator
///
/// # Examples
/// ```
/// use grumble::output::formatters::join_letters;
///
/// assert_eq!(join_letters(&['A', 'X', 'T'], ", "), "A, X, T");
/// ```
#[must_use]
pub fn join_letters(letters: &[char], separator: &str) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a score relative to the best score of the run
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_letters_with_separators() {
        let letters = ['A', 'X', 'T', 'M', 'E', 'S'];
        assert_eq!(join_letters(&letters, ", "), "A, X, T, M, E, S");
        assert_eq!(join_letters(&letters, " - "), "A - X - T - M - E - S");
    }

    #[test]
    fn join_letters_empty() {
        assert_eq!(join_letters(&[], ", "), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_relative_to_best() {
        assert_eq!(score_bar(15, 15, 5), "█████");
        assert_eq!(score_bar(6, 15, 5), "██░░░");
    }
}
