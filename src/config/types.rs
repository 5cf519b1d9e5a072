use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::store::NotifyPolicy;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stores: StoresConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// How the stores are seeded and when they notify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoresConfig {
    /// Name shown before the user edits anything (default: "World").
    #[serde(default = "default_seed_name")]
    pub seed_name: String,
    /// Count the seed write as the first name change (default: false).
    #[serde(default)]
    pub count_seed: bool,
    /// Notification policy of the name store (default: always).
    #[serde(default)]
    pub notify: NotifyPolicy,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Which editor event writes the name back (default: change).
    #[serde(default)]
    pub edit_trigger: EditTrigger,
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Which editor event publishes the edited name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum EditTrigger {
    /// Publish when the edit is committed with Enter.
    #[default]
    Change,
    /// Publish on every keystroke that changes the text.
    Input,
}

fn default_seed_name() -> String {
    "World".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self {
            seed_name: default_seed_name(),
            count_seed: false,
            notify: NotifyPolicy::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            edit_trigger: EditTrigger::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
