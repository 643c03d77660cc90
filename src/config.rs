//! Engine configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What happens to moves played after the game has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EndPolicy {
    /// Reject every move once the game is over
    #[default]
    Strict,
    /// Keep placing and recording stones, but no longer evaluate wins or
    /// forbidden cells; the final result stays as it was
    RecordAfterEnd,
}

/// Version of the forbidden-move rules.
///
/// Both versions share the three/four classification. They differ only in
/// how overlines are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// A single overline axis already forbids the cell
    V1,
    /// Only two or more overline axes forbid the cell
    #[default]
    V2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub end_policy: EndPolicy,
    pub rule_set: RuleSet,
}

impl EngineConfig {
    pub fn new(end_policy: EndPolicy, rule_set: RuleSet) -> Self {
        Self {
            end_policy,
            rule_set,
        }
    }
}
