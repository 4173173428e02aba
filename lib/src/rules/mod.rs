/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod duration;
mod group;
mod rule;
mod slo;

pub use duration::RuleDuration;
pub use group::{build_groups, RuleCategory, RuleGroup};
pub use rule::{AlertRule, Annotations, Labels, RecordRule, Rule};
pub use slo::{Slo, SloRules, StorageSlo};
