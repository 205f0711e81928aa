//! Runtime configuration, read from the environment.

use std::path::PathBuf;

use crate::shell::ShellOptions;

pub const DATA_FILE_VAR: &str = "DEALERSHIP_DATA_FILE";
pub const AUTOSAVE_VAR: &str = "DEALERSHIP_AUTOSAVE";
pub const CLEAR_SCREEN_VAR: &str = "DEALERSHIP_CLEAR_SCREEN";

pub const DEFAULT_DATA_FILE: &str = "resources/CarsDB.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Inventory file loaded at startup and written on save.
    pub data_file: PathBuf,
    /// Save the inventory when the user exits.
    pub autosave: bool,
    /// Clear the terminal before each menu.
    pub clear_screen: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autosave: true,
            clear_screen: true,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_file = lookup(DATA_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        Self {
            data_file,
            autosave: flag(&lookup, AUTOSAVE_VAR, defaults.autosave),
            clear_screen: flag(&lookup, CLEAR_SCREEN_VAR, defaults.clear_screen),
        }
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            autosave: self.autosave,
            clear_screen: self.clear_screen,
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value = %raw, default, "unrecognised boolean; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.data_file, PathBuf::from("resources/CarsDB.csv"));
    }

    #[test]
    fn reads_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (DATA_FILE_VAR, "/tmp/cars.csv"),
            (AUTOSAVE_VAR, "no"),
            (CLEAR_SCREEN_VAR, "OFF"),
        ]));

        assert_eq!(config.data_file, PathBuf::from("/tmp/cars.csv"));
        assert!(!config.autosave);
        assert!(!config.clear_screen);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (DATA_FILE_VAR, "   "),
            (AUTOSAVE_VAR, "maybe"),
        ]));

        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(config.autosave);
    }
}
