//! Number formatting shared by the GUI and the CLI.

/// Format an integer with comma thousands separators (`1247` → `"1,247"`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage with one decimal place (`42.857` → `"42.9%"`).
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1247), "1,247");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_percent_with_one_decimal() {
        assert_eq!(format_percent(42.857), "42.9%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    proptest! {
        #[test]
        fn grouping_round_trips(value in any::<u64>()) {
            let formatted = format_thousands(value);
            let stripped: String = formatted.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped.parse::<u64>().unwrap(), value);
            for group in formatted.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
