use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}
