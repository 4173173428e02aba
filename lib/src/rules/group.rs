/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use itertools::Itertools;
use serde::Serialize;

use super::{Rule, SloRules, StorageSlo};
use crate::SloId;

/// A named prometheus rule group. Never empty.
#[derive(Serialize, PartialEq, Eq, Debug)]
pub struct RuleGroup<'a> {
    pub name: String,
    pub rules: &'a [Rule],
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RuleCategory {
    SliRecordings,
    MetaRecordings,
    Alerts,
}

impl RuleCategory {
    /// Categories in the order their groups appear in the rule file.
    pub const ALL: [Self; 3] = [Self::SliRecordings, Self::MetaRecordings, Self::Alerts];

    fn prefix(self) -> &'static str {
        match self {
            RuleCategory::SliRecordings => "sloth-slo-sli-recordings",
            RuleCategory::MetaRecordings => "sloth-slo-meta-recordings",
            RuleCategory::Alerts => "sloth-slo-alerts",
        }
    }

    pub fn group_name(self, id: &SloId) -> String {
        format!("{}-{id}", self.prefix())
    }

    fn holds_alerts(self) -> bool {
        matches!(self, RuleCategory::Alerts)
    }

    pub fn rules(self, rules: &SloRules) -> &[Rule] {
        match self {
            RuleCategory::SliRecordings => &rules.sli_error_rec_rules,
            RuleCategory::MetaRecordings => &rules.metadata_rec_rules,
            RuleCategory::Alerts => &rules.alert_rules,
        }
    }
}

impl<'a> RuleGroup<'a> {
    pub fn new(name: String, rules: &'a [Rule]) -> Option<Self> {
        (!rules.is_empty()).then_some(Self { name, rules })
    }
}

/// Split every SLO's rules into groups, keeping SLO order, then
/// category order, then rule order. Empty categories are skipped.
pub fn build_groups(slos: &[StorageSlo]) -> Vec<RuleGroup<'_>> {
    let groups = slos
        .iter()
        .flat_map(|slo| {
            if slo.rules.is_empty() {
                log::debug!("SLO {} has no rules", slo.slo.id);
            }
            RuleCategory::ALL.into_iter().filter_map(move |category| {
                let rules = category.rules(&slo.rules);
                let misplaced = rules
                    .iter()
                    .filter(|rule| rule.is_alert() != category.holds_alerts())
                    .count();
                if misplaced > 0 {
                    log::warn!(
                        "SLO {}: {misplaced} rule(s) of the wrong kind in {category:?}",
                        slo.slo.id
                    );
                }
                RuleGroup::new(category.group_name(&slo.slo.id), rules)
            })
        })
        .collect::<Vec<_>>();

    groups
        .iter()
        .map(|group| group.name.as_str())
        .duplicates()
        .for_each(|name| log::warn!("duplicate rule group name: {name}"));

    groups
}
