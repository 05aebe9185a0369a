// ---------------------------------------------------------------------------
// Canonical parsing for numeric-in-string dataset fields
// ---------------------------------------------------------------------------

/// Extract the leading decimal number from a unit-suffixed field.
///
/// The dataset stores many numeric specs as display strings (`"450 W"`,
/// `"24 GB"`, `"82.58 TFLOPS"`, `"1,008 GB/s"`). Every comparison or bucket
/// test goes through this one extractor; raw string comparison is never
/// valid for ordering or ratio math.
///
/// Rules: leading whitespace is skipped, an optional sign is honored,
/// thousands-separator commas inside the integer part are dropped, and the
/// scan stops at the first character that no longer fits a decimal number.
/// Returns `None` when no digit is found at all.
pub fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut token = String::new();
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.chars().enumerate() {
        match c {
            '+' | '-' if i == 0 => token.push(c),
            '0'..='9' => {
                token.push(c);
                seen_digit = true;
            }
            // Thousands separator: only meaningful between integer digits.
            ',' if seen_digit && !seen_dot => {}
            '.' if !seen_dot => {
                token.push(c);
                seen_dot = true;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    token.parse().ok()
}

/// [`leading_number`] rounded into an integer benchmark score.
pub fn leading_u32(s: &str) -> Option<u32> {
    leading_number(s).map(|v| v.round() as u32)
}

/// Parse a capability flag column (`unlocked_multiplier`, `mem_eec`, ...).
/// Unrecognized or empty cells read as "no data" rather than `false`.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_unit_suffixed_values() {
        assert_eq!(leading_number("450 W"), Some(450.0));
        assert_eq!(leading_number("450W"), Some(450.0));
        assert_eq!(leading_number("24 TFLOPS"), Some(24.0));
        assert_eq!(leading_number("443.5 GPixel/s"), Some(443.5));
        assert_eq!(leading_number("384 bit"), Some(384.0));
    }

    #[test]
    fn handles_whitespace_signs_and_separators() {
        assert_eq!(leading_number("  65  "), Some(65.0));
        assert_eq!(leading_number("1,008 GB/s"), Some(1008.0));
        assert_eq!(leading_number("-12.5 dB"), Some(-12.5));
        assert_eq!(leading_number("+5"), Some(5.0));
        assert_eq!(leading_number(".5 GHz"), Some(0.5));
    }

    #[test]
    fn stops_at_first_non_numeric_run() {
        // Second dot terminates the token.
        assert_eq!(leading_number("3.5.7"), Some(3.5));
        // Comma after the fraction is a suffix, not a separator.
        assert_eq!(leading_number("1.5,2"), Some(1.5));
    }

    #[test]
    fn rejects_non_numeric_cells() {
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("N/A"), None);
        assert_eq!(leading_number("unknown"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number(",5"), None);
    }

    #[test]
    fn rounds_integer_scores() {
        assert_eq!(leading_u32("60,321"), Some(60321));
        assert_eq!(leading_u32("2,950.6"), Some(2951));
        assert_eq!(leading_u32("n/a"), None);
    }

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("maybe"), None);
    }
}
