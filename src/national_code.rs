use crate::checksum::expected_check_digit;
use crate::error::Error;
use crate::types::NationalCode;

/// Number of digits in a standardized national code.
pub const CODE_LEN: usize = 10;

/// Fewest digits accepted before zero-padding.
pub const MIN_DIGITS: usize = 8;

/// Validates an Iranian National Code.
///
/// Characters other than `0`-`9` are ignored, so `"049-937089-9"` and
/// `"0499370899"` are equivalent. Inputs with 8 or 9 digits are left-padded
/// with zeros. The result is `false` for every string that is not a valid
/// code; this function never panics and has no side effects.
///
/// ```
/// use iran_national_code::is_valid_national_code;
///
/// assert!(is_valid_national_code("0499370899"));
/// assert!(!is_valid_national_code("6587452158"));
/// assert!(!is_valid_national_code("1111111111"));
/// ```
#[must_use]
pub fn is_valid_national_code(input: &str) -> bool {
    standardize(input).is_ok()
}

/// Validates a national code, reporting the first reason it was rejected.
///
/// Runs the same checks as [`is_valid_national_code`], in the same order.
///
/// # Errors
///
/// Returns the [`Error`] variant for the failing stage: digit count,
/// repeated digit, then checksum.
pub fn diagnose(input: &str) -> Result<NationalCode, Error> {
    standardize(input).map(NationalCode::from_digits)
}

/// Strips non-digits, pads to ten digits and checks the result.
///
/// Returns the numeric value of each digit of the standardized code.
pub(crate) fn standardize(input: &str) -> Result<[u8; CODE_LEN], Error> {
    let cleaned: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let len = cleaned.len();
    if len < MIN_DIGITS {
        return Err(Error::TooShort { digits: len });
    }
    if len > CODE_LEN {
        return Err(Error::TooLong { digits: len });
    }

    let mut digits = [0u8; CODE_LEN];
    digits[CODE_LEN - len..].copy_from_slice(&cleaned);

    let first = digits[0];
    if digits.iter().all(|&d| d == first) {
        return Err(Error::RepeatedDigit(char::from(b'0' + first)));
    }

    let body: [u8; CODE_LEN - 1] = std::array::from_fn(|i| digits[i]);
    let found = digits[CODE_LEN - 1];
    let expected = expected_check_digit(&body);
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }

    Ok(digits)
}
