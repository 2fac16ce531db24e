use serde::{Deserialize, Serialize};
use watchcover_coverage::CoverageParams;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Speed bound used to classify telemetry pairs
    #[serde(default)]
    pub coverage: CoverageParams,

    #[serde(default)]
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// Seconds of the target duration a viewer may miss and still complete (default: 5)
    #[serde(default = "default_completion_slack")]
    pub slack_secs: f64,

    /// Reward granted on completion (default: 1)
    #[serde(default = "default_reward")]
    pub reward: u32,
}

fn default_completion_slack() -> f64 {
    5.0
}
fn default_reward() -> u32 {
    1
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            slack_secs: default_completion_slack(),
            reward: default_reward(),
        }
    }
}
