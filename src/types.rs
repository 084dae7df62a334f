use crate::error::Error;
use crate::national_code::{CODE_LEN, diagnose};

/// Validated Iranian National Code, stored in its standardized 10-digit form.
///
/// Guaranteed valid by construction: holding a `NationalCode` proves the
/// digit count, repetition and checksum checks all passed.
/// Use `"0499370899".parse::<NationalCode>()` or `NationalCode::try_from(string)`
/// to create. Separators are dropped and short codes are zero-padded, so
/// `"13542419"` parses to `0013542419`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct NationalCode(String);

impl NationalCode {
    pub(crate) fn from_digits(digits: [u8; CODE_LEN]) -> Self {
        Self(digits.iter().map(|&d| char::from(b'0' + d)).collect())
    }

    /// The ten digits, including leading zeros.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first nine digits, which the check digit is computed from.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.0[..CODE_LEN - 1]
    }

    /// Numeric value of the last digit.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[CODE_LEN - 1] - b'0'
    }
}

/// `{}` prints the ten digits; `{:#}` prints the grouped `XXX-XXXXXX-X` form.
impl std::fmt::Display for NationalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            let s = &self.0;
            write!(f, "{}-{}-{}", &s[..3], &s[3..9], &s[9..])
        } else {
            f.write_str(&self.0)
        }
    }
}

impl std::str::FromStr for NationalCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        diagnose(s)
    }
}

impl TryFrom<&str> for NationalCode {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        diagnose(s)
    }
}

impl TryFrom<String> for NationalCode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        diagnose(&s)
    }
}

impl From<NationalCode> for String {
    fn from(code: NationalCode) -> Self {
        code.0
    }
}

impl AsRef<str> for NationalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_national_code() {
        assert!("0499370899".parse::<NationalCode>().is_ok());
        assert!("4608968882".parse::<NationalCode>().is_ok());
        assert!(NationalCode::try_from("9876543210").is_ok());
        assert!(NationalCode::try_from("1234567891".to_string()).is_ok());
    }

    #[test]
    fn invalid_national_code() {
        assert!("6587452158".parse::<NationalCode>().is_err());
        assert!("1111111111".parse::<NationalCode>().is_err());
        assert!("".parse::<NationalCode>().is_err());
        assert!("12345678901234".parse::<NationalCode>().is_err());
    }

    #[test]
    fn parsing_normalizes() {
        let code: NationalCode = "049-937089-9".parse().unwrap();
        assert_eq!(code.as_str(), "0499370899");

        let padded: NationalCode = "13542419".parse().unwrap();
        assert_eq!(padded.as_str(), "0013542419");
        assert_eq!(padded, "0013542419".parse::<NationalCode>().unwrap());
    }

    #[test]
    fn accessors() {
        let code: NationalCode = "0499370899".parse().unwrap();
        assert_eq!(code.body(), "049937089");
        assert_eq!(code.check_digit(), 9);

        let zero: NationalCode = "9876543210".parse().unwrap();
        assert_eq!(zero.check_digit(), 0);
    }

    #[test]
    fn display_plain_and_grouped() {
        let code: NationalCode = "0499370899".parse().unwrap();
        assert_eq!(code.to_string(), "0499370899");
        assert_eq!(format!("{code:#}"), "049-937089-9");
    }

    #[test]
    fn grouped_display_parses_back() {
        let code: NationalCode = "4608968882".parse().unwrap();
        let grouped = format!("{code:#}");
        assert_eq!(grouped.parse::<NationalCode>().unwrap(), code);
    }

    #[test]
    fn into_string() {
        let code: NationalCode = "13542419".parse().unwrap();
        let s: String = code.into();
        assert_eq!(s, "0013542419");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn national_code_serde_roundtrip() {
        let code: NationalCode = "0499370899".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"0499370899\"");
        let parsed: NationalCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, code);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<NationalCode>("\"6587452158\"").is_err());
        assert!(serde_json::from_str::<NationalCode>("\"0000000000\"").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_normalizes() {
        let code: NationalCode = serde_json::from_str("\"049 937089 9\"").unwrap();
        assert_eq!(code.as_str(), "0499370899");
    }
}
