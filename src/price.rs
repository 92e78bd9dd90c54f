/// Parses marketplace price text into a number.
///
/// Accepted shape: optional currency marker, digits with optional thousands
/// separators, optional decimal part. Everything after the number is
/// discarded, so range suffixes like "$250.00 to $300.00" yield the low end.
/// Text with no parseable number yields `None`, never zero.
pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    let start = text.find(|c: char| c.is_ascii_digit())?;
    if !is_currency_marker(text[..start].trim_end()) {
        return None;
    }

    let mut number = String::new();
    let mut seen_dot = false;
    for c in text[start..].chars() {
        match c {
            '0'..='9' => number.push(c),
            // thousands separator, only valid before the decimal point
            ',' if !seen_dot => {}
            '.' if !seen_dot => {
                seen_dot = true;
                number.push('.');
            }
            _ => break,
        }
    }

    number.parse().ok()
}

fn is_currency_marker(prefix: &str) -> bool {
    matches!(
        prefix,
        "" | "$" | "US $" | "C $" | "AU $" | "£" | "€" | "EUR" | "GBP"
    )
}

#[test]
fn test_parse_price() {
    assert_eq!(parse_price("$1,000.00"), Some(1000.0));
    assert_eq!(parse_price("$500"), Some(500.0));
    assert_eq!(parse_price("$250.00 to $300.00"), Some(250.0));
    assert_eq!(parse_price("US $2,400.99"), Some(2400.99));
    assert_eq!(parse_price("invalid"), None);
    assert_eq!(parse_price(""), None);
}
