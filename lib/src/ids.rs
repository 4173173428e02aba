/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{fmt::Display, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::{Error, Result};

/// Opaque SLO identifier. Group names are derived from it verbatim.
#[derive(
    SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug,
)]
pub struct SloId(String);

impl SloId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SloId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SloId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::EmptySloId);
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::SloId;
    use crate::Error;

    #[test]
    fn parse_slo_id() {
        let id = SloId::from_str("my-svc-requests").unwrap();
        assert_eq!(id.as_str(), "my-svc-requests");
    }

    #[test]
    fn reject_empty_slo_id() {
        assert!(matches!(SloId::from_str(""), Err(Error::EmptySloId)));
    }
}
