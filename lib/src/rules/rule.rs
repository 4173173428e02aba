/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RuleDuration;

pub type Labels = BTreeMap<String, String>;
pub type Annotations = BTreeMap<String, String>;

/// A generated prometheus rule. Expressions are opaque strings.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(untagged)]
pub enum Rule {
    Record(RecordRule),
    Alert(AlertRule),
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct RecordRule {
    pub record: String,
    pub expr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct AlertRule {
    pub alert: String,
    pub expr: String,
    #[serde(default, rename = "for", skip_serializing_if = "Option::is_none")]
    pub r#for: Option<RuleDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl Rule {
    pub fn is_alert(&self) -> bool {
        matches!(self, Rule::Alert(_))
    }
}

impl From<RecordRule> for Rule {
    fn from(rule: RecordRule) -> Self {
        Self::Record(rule)
    }
}

impl From<AlertRule> for Rule {
    fn from(rule: AlertRule) -> Self {
        Self::Alert(rule)
    }
}
