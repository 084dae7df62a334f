/// Reason a string was rejected as a national code.
///
/// Variants are listed in the order the validation pipeline checks them;
/// only the first failing stage is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Fewer than 8 digits after stripping non-digits.
    #[error("too few digits: expected 8 to 10, got {digits}")]
    TooShort { digits: usize },
    /// More than 10 digits after stripping non-digits.
    #[error("too many digits: expected 8 to 10, got {digits}")]
    TooLong { digits: usize },
    /// Every digit of the padded code is the same.
    #[error("all digits are '{0}'")]
    RepeatedDigit(char),
    /// The last digit differs from the one computed from the first nine.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
    /// Input to [`check_digit`](crate::check_digit) was not 9 ASCII digits.
    #[error("invalid code body {0:?}: expected exactly 9 ASCII digits")]
    InvalidBody(String),
}
