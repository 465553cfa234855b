// Luhn checksum

/// Returns true when the digit string passes the Luhn check.
///
/// Walks the digits right to left, doubling every second digit (subtracting
/// 9 when the doubled value exceeds 9) and summing; the string passes when
/// the sum is a multiple of 10. Any non-digit character fails the check
/// outright rather than panicking; callers strip separators beforehand.
pub fn checksum(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (i, ch) in digits.chars().rev().enumerate() {
        let Some(mut digit) = ch.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}
