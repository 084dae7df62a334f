use crate::error::Error;

/// Positional weights for the nine body digits, first digit first.
pub const WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Sum of the body digits, each multiplied by its weight in [`WEIGHTS`].
#[must_use]
pub fn weighted_sum(body: &[u8; 9]) -> u32 {
    body.iter()
        .zip(WEIGHTS)
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum()
}

/// Check digit implied by a 9-digit body.
///
/// `r = sum mod 11`; the check digit is `r` when `r < 2`, otherwise `11 - r`.
/// Always in `0..=9`.
#[must_use]
pub fn expected_check_digit(body: &[u8; 9]) -> u8 {
    let remainder = weighted_sum(body) % 11;
    let digit = if remainder < 2 { remainder } else { 11 - remainder };
    // remainder < 11, so digit <= 9
    digit as u8
}

/// Computes the check digit for a body given as a 9-character string.
///
/// Unlike validation, no characters are stripped: the body must be exactly
/// nine ASCII digits.
///
/// # Errors
///
/// Returns [`Error::InvalidBody`] if `body` is not exactly 9 ASCII digits.
pub fn check_digit(body: &str) -> Result<u8, Error> {
    let bytes: &[u8; 9] = body
        .as_bytes()
        .try_into()
        .map_err(|_| Error::InvalidBody(body.to_owned()))?;
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Error::InvalidBody(body.to_owned()));
    }
    Ok(expected_check_digit(&(*bytes).map(|b| b - b'0')))
}
