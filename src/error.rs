//! Crate-level error aggregating every stage of the pipeline.

use crate::style::stylesheet::GenerateError;
use crate::theme::{ThemeError, TokenError};

/// Any failure from the provider entry points.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("invalid engine config: {0}")]
    Config(#[from] toml::de::Error),
}
