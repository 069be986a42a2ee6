// Output formatting — terminal display of comparison results and counters.

pub mod terminal;

/// Format a score as a percentage with two decimals, e.g. "93.16%".
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_percent(0.9316), "93.16%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
