/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod rules;

pub(crate) mod error;
pub(crate) mod ids;
mod sink;
mod storage;

pub use error::{Error, Result};
pub use ids::SloId;
pub use rules::{
    build_groups, AlertRule, Annotations, Labels, RecordRule, Rule, RuleCategory, RuleDuration,
    RuleGroup, Slo, SloRules, StorageSlo,
};
pub use sink::Sink;
pub use storage::{GroupedRulesYamlRepo, Header};

pub use tokio_util::sync::CancellationToken;
