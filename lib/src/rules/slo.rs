/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use super::Rule;
use crate::SloId;

/// The part of an SLO the rule file generation needs to know about.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct Slo {
    pub id: SloId,
}

/// Rules generated for a single SLO, per category.
#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Clone, Debug)]
pub struct SloRules {
    #[serde(default)]
    pub sli_error_rec_rules: Vec<Rule>,
    #[serde(default)]
    pub metadata_rec_rules: Vec<Rule>,
    #[serde(default)]
    pub alert_rules: Vec<Rule>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct StorageSlo {
    pub slo: Slo,
    #[serde(default)]
    pub rules: SloRules,
}

impl Slo {
    pub fn new(id: SloId) -> Self {
        Self { id }
    }
}

impl SloRules {
    pub fn is_empty(&self) -> bool {
        self.sli_error_rec_rules.is_empty()
            && self.metadata_rec_rules.is_empty()
            && self.alert_rules.is_empty()
    }
}

impl StorageSlo {
    pub fn new(slo: Slo, rules: SloRules) -> Self {
        Self { slo, rules }
    }
}
