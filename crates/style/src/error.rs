use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("color must start with '#', got: {0}")]
    MissingHashPrefix(String),
    #[error("invalid hex color length: expected 3 or 6 digits, got {0}")]
    InvalidHexLength(usize),
    #[error("hex color must be ASCII, got: {0}")]
    NonAsciiHex(String),
    #[error("invalid {component} component: {source}")]
    InvalidComponent {
        component: &'static str,
        source: ParseIntError,
    },
}
