//! Error type for the verbalization pipeline.

use thiserror::Error;

/// The engine's single failure mode: a digit run that cannot be read as
/// an integer — in practice, one exceeding the supported magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerbalizeError {
    #[error("malformed numeral: {0}")]
    MalformedNumeral(String),
}
