//! Command-line flags. Every flag overrides the matching config value.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, EditTrigger};
use crate::store::NotifyPolicy;

#[derive(Debug, Parser)]
#[command(
    name = "hello-stores",
    version,
    about = "Greets you by name and keeps count of how often you change it"
)]
pub struct Cli {
    /// Path to a TOML config file (default: user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name shown before any edit
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Count the starting name as the first change
    #[arg(long, conflicts_with = "no_count_seed")]
    pub count_seed: bool,

    /// Don't count the starting name, even if the config file does
    #[arg(long)]
    pub no_count_seed: bool,

    /// When the name store notifies its dependents
    #[arg(long, value_enum, value_name = "POLICY")]
    pub notify: Option<NotifyPolicy>,

    /// Which editor event writes the name back
    #[arg(long, value_enum, value_name = "TRIGGER")]
    pub edit_trigger: Option<EditTrigger>,
}

impl Cli {
    /// Applies flag overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.stores.seed_name = name.clone();
        }
        if self.count_seed {
            config.stores.count_seed = true;
        } else if self.no_count_seed {
            config.stores.count_seed = false;
        }
        if let Some(notify) = self.notify {
            config.stores.notify = notify;
        }
        if let Some(trigger) = self.edit_trigger {
            config.ui.edit_trigger = trigger;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["hello-stores"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "hello-stores",
            "--name",
            "Ada",
            "--count-seed",
            "--notify",
            "on-change",
            "--edit-trigger",
            "input",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.stores.seed_name, "Ada");
        assert!(config.stores.count_seed);
        assert_eq!(config.stores.notify, NotifyPolicy::OnChange);
        assert_eq!(config.ui.edit_trigger, EditTrigger::Input);
    }

    #[test]
    fn no_count_seed_overrides_config_file() {
        let cli = Cli::try_parse_from(["hello-stores", "--no-count-seed"]).unwrap();
        let mut config = Config::default();
        config.stores.count_seed = true;
        cli.apply(&mut config);
        assert!(!config.stores.count_seed);
    }

    #[test]
    fn count_seed_flags_conflict() {
        assert!(
            Cli::try_parse_from(["hello-stores", "--count-seed", "--no-count-seed"]).is_err()
        );
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["hello-stores", "--notify", "sometimes"]).is_err());
    }
}
