//! Argument parsing and output rendering for the `national-code` binary.

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use iran_national_code::diagnose;

/// Sample code validated when no codes are given on the command line.
pub const DEMO_CODE: &str = "6587452158";

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "national-code", version, about = "Validate Iranian National Codes")]
pub struct Cli {
    /// National codes to validate. Non-digit characters are ignored.
    /// Defaults to the sample code 6587452158.
    pub codes: Vec<String>,

    /// Output format: one line per code
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "NATIONAL_CODE_FORMAT")]
    pub format: OutputFormat,

    /// Print why each invalid code was rejected
    #[arg(long, env = "NATIONAL_CODE_EXPLAIN", value_parser = BoolishValueParser::new())]
    pub explain: bool,

    /// Exit with status 1 if any code is invalid
    #[arg(long, env = "NATIONAL_CODE_STRICT", value_parser = BoolishValueParser::new())]
    pub strict: bool,
}

impl Cli {
    /// Codes to validate, falling back to [`DEMO_CODE`].
    pub fn codes(&self) -> Vec<&str> {
        if self.codes.is_empty() {
            vec![DEMO_CODE]
        } else {
            self.codes.iter().map(String::as_str).collect()
        }
    }
}

/// Number of invalid codes that should fail the run.
///
/// Always zero unless `strict` is set.
pub fn strict_failures(reports: &[Report<'_>], strict: bool) -> usize {
    if !strict {
        return 0;
    }
    reports.iter().filter(|r| !r.valid).count()
}

/// Verdict for one input, as printed by the binary.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report<'a> {
    pub input: &'a str,
    pub valid: bool,
    pub normalized: Option<String>,
    pub reason: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a str) -> Self {
        match diagnose(input) {
            Ok(code) => Self {
                input,
                valid: true,
                normalized: Some(code.into()),
                reason: None,
            },
            Err(e) => Self {
                input,
                valid: false,
                normalized: None,
                reason: Some(e.to_string()),
            },
        }
    }

    /// Renders the report as a single line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat, explain: bool) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Text if !explain => self.valid.to_string(),
            OutputFormat::Text => match &self.reason {
                None => format!("{}: valid", self.input),
                Some(reason) => format!("{}: invalid ({reason})", self.input),
            },
        })
    }
}
