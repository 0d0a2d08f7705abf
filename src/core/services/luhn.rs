//! Luhn (mod 10) checksum
//!
//! Pure arithmetic over ASCII digit strings. Any non-digit makes the input
//! fail rather than panic.

/// Sum the Luhn-transformed digits of `digits`
///
/// Walks from the last digit to the first, doubling every second digit
/// (starting with the one before the last) and folding doubled values above
/// 9 back to a single digit. Returns `None` if the input is empty or
/// contains anything other than ASCII digits.
#[must_use]
pub fn luhn_sum(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }

    let mut sum = 0u64;
    let mut alternate = false;
    for b in digits.bytes().rev() {
        if !b.is_ascii_digit() {
            return None;
        }
        let mut n = u64::from(b - b'0');
        if alternate {
            n *= 2;
            if n > 9 {
                n = (n % 10) + 1;
            }
        }
        sum += n;
        alternate = !alternate;
    }
    Some(sum)
}

/// Whether `digits` passes the Luhn check
#[must_use]
pub fn is_luhn_valid(digits: &str) -> bool {
    luhn_sum(digits).is_some_and(|sum| sum % 10 == 0)
}

/// Compute the check digit that makes `payload` followed by it Luhn-valid
///
/// Returns `None` for empty or non-digit payloads.
#[must_use]
pub fn check_digit(payload: &str) -> Option<u8> {
    // Appending a digit shifts every payload digit one place left, so sum
    // the payload as if a zero check digit were already there.
    let sum = luhn_sum(&format!("{payload}0"))?;
    u8::try_from((10 - sum % 10) % 10).ok()
}
