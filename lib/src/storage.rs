/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::Display;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::{
    rules::{build_groups, RuleGroup, StorageSlo},
    sink::Sink,
    Error, Result,
};

/// Identification of the generator in the rule file header.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Header {
    pub generator: String,
    pub version: String,
    pub url: String,
}

#[derive(Serialize)]
struct RuleGroups<'a> {
    groups: &'a [RuleGroup<'a>],
}

/// Stores SLO rules as a single prometheus rule file, one group per SLO
/// and rule category.
pub struct GroupedRulesYamlRepo<S> {
    sink: S,
    header: Header,
}

impl Header {
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            generator: String::from("Sloth"),
            version: String::from("dev"),
            url: String::from("https://github.com/slok/sloth"),
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n---\n# Code generated by {} ({}): {}.\n# DO NOT EDIT.\n\n",
            self.generator, self.version, self.url
        )
    }
}

impl<S> GroupedRulesYamlRepo<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            header: Header::default(),
        }
    }

    pub fn with_header(self, header: Header) -> Self {
        Self { header, ..self }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Render the complete rule file, header included.
    pub fn render(&self, groups: &[RuleGroup]) -> Result<String> {
        let body = serde_yaml::to_string(&RuleGroups { groups }).map_err(Error::Serialize)?;
        Ok(format!("{}{body}", self.header))
    }
}

impl<S: Sink> GroupedRulesYamlRepo<S> {
    pub fn store_slos(&mut self, ctx: &CancellationToken, slos: &[StorageSlo]) -> Result<()> {
        if slos.is_empty() {
            return Err(Error::NoSlos);
        }

        let groups = build_groups(slos);
        if groups.is_empty() {
            return Err(Error::NoRules);
        }

        let doc = self.render(&groups)?;

        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        self.sink.accept(doc.as_bytes()).map_err(Error::Write)?;
        log::debug!(
            "stored {} rule groups for {} SLOs ({} bytes)",
            groups.len(),
            slos.len(),
            doc.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Header;

    #[test]
    fn default_header() {
        assert_eq!(
            Header::default().to_string(),
            "\n---\n# Code generated by Sloth (dev): https://github.com/slok/sloth.\n# DO NOT EDIT.\n\n"
        );
    }

    #[test]
    fn versioned_header() {
        let header = Header::with_version("v0.11.0");
        assert_eq!(header.generator, "Sloth");
        assert!(header
            .to_string()
            .contains("# Code generated by Sloth (v0.11.0): https://github.com/slok/sloth."));
    }
}
