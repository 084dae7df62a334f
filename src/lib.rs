#![doc = include_str!("../README.md")]

pub mod checksum;
pub mod error;
pub mod national_code;
pub mod types;

// Re-exports for convenient access
pub use checksum::check_digit;
pub use error::Error;
pub use national_code::{diagnose, is_valid_national_code};
pub use types::NationalCode;
