/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no SLOs")]
    NoSlos,
    #[error("no rules generated")]
    NoRules,
    #[error("failed to serialize rule groups: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error("failed to write rule file: {0}")]
    Write(#[source] std::io::Error),
    #[error("cancelled before writing rule file")]
    Cancelled,
    #[error("empty SLO id")]
    EmptySloId,
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
}

impl Error {
    /// The request itself was unusable (no SLOs, or no rules at all).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NoSlos | Self::NoRules)
    }
}
