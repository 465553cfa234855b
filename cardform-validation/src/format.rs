// Display formatters
//
// Presentation-only transforms for the two masked inputs. Neither feeds
// validation: the validators re-strip separators themselves, so formatting
// can never change whether a value is accepted.

/// Format a card number for display: digits only, at most 19, grouped in
/// blocks of four with single spaces and no trailing space.
///
/// Idempotent, so it can be re-applied on every keystroke:
///
/// ```
/// let once = cardform_validation::format::card_number("4111-1111-1111-1111");
/// assert_eq!(once, "4111 1111 1111 1111");
/// assert_eq!(cardform_validation::format::card_number(&once), once);
/// ```
pub fn card_number(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(19)
        .collect();

    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*digit);
    }
    out
}

/// Progressive MM/YY mask: digits only, at most four, with "/" inserted
/// after the month once a third digit appears.
///
/// ```
/// assert_eq!(cardform_validation::format::expiry("0"), "0");
/// assert_eq!(cardform_validation::format::expiry("06"), "06");
/// assert_eq!(cardform_validation::format::expiry("062"), "06/2");
/// assert_eq!(cardform_validation::format::expiry("0627"), "06/27");
/// assert_eq!(cardform_validation::format::expiry("06/27"), "06/27");
/// ```
pub fn expiry(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(4)
        .collect();

    if digits.len() >= 3 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(card_number("41111"), "4111 1");
        assert_eq!(card_number("4111"), "4111");
        assert_eq!(card_number(""), "");
    }

    #[test]
    fn test_card_number_strips_junk_and_truncates() {
        assert_eq!(card_number("4111-1111 1111x1111"), "4111 1111 1111 1111");
        // 21 digits in, 19 kept.
        assert_eq!(
            card_number("123456789012345678901"),
            "1234 5678 9012 3456 789"
        );
    }

    #[test]
    fn test_card_number_never_ends_with_a_space() {
        for len in 0..=19 {
            let input = "4".repeat(len);
            assert!(!card_number(&input).ends_with(' '), "len {}", len);
        }
    }

    #[test]
    fn test_card_number_idempotent() {
        for input in ["4111111111111111", "4111 1111", "", "12-34", "abcd"] {
            let once = card_number(input);
            assert_eq!(card_number(&once), once);
        }
    }

    #[test]
    fn test_expiry_progressive_mask() {
        assert_eq!(expiry(""), "");
        assert_eq!(expiry("1"), "1");
        assert_eq!(expiry("12"), "12");
        assert_eq!(expiry("123"), "12/3");
        assert_eq!(expiry("1234"), "12/34");
        assert_eq!(expiry("12345"), "12/34");
        assert_eq!(expiry("12/34"), "12/34");
    }

    #[test]
    fn test_expiry_idempotent() {
        for input in ["", "1", "12", "123", "1234", "12/34", "ab12cd34"] {
            let once = expiry(input);
            assert_eq!(expiry(&once), once);
        }
    }
}
