/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Sloth(#[from] sloth_prometheus::Error),
    #[error("failed to read SLO rules: {0}: {1}")]
    ReadSlos(PathBuf, std::io::Error),
    #[error("failed to decode SLO rules: {0}: {1}")]
    DecodeSlosYaml(PathBuf, serde_yaml::Error),
    #[error("failed to decode SLO rules: {0}: {1}")]
    DecodeSlosJson(PathBuf, serde_json::Error),
    #[error("failed to open rule file: {0}: {1}")]
    CreateOutput(PathBuf, std::io::Error),
}
