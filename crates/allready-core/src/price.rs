//! Price field filtering.

/// Strip everything but ASCII digits and `.` from a price edit.
///
/// Applied on every keystroke, so the draft never holds anything the
/// caption templates would not print verbatim.
#[must_use]
pub fn filter_price(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_digits_and_dots() {
        assert_eq!(filter_price("15000"), "15000");
        assert_eq!(filter_price("12.50"), "12.50");
    }

    #[test]
    fn drops_currency_and_separators() {
        assert_eq!(filter_price("15 000 FCFA"), "15000");
        assert_eq!(filter_price("$1,299.99"), "1299.99");
    }

    #[test]
    fn non_numeric_input_becomes_empty() {
        assert_eq!(filter_price("free"), "");
        assert_eq!(filter_price("٣٤"), "", "non-ASCII digits are dropped");
    }
}
