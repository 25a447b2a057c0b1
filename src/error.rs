use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input must be a 2-character, 4-character, or 8-character string or hexadecimal equivalent.")]
    InvalidValueLength,

    #[error("Hex value must be exactly 4, 8, or 16 hex digits (2, 4, or 8 bytes).")]
    InvalidHexLength,

    #[error("Invalid hexadecimal input: {0}.")]
    InvalidHexValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
