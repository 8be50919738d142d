//! Configuration loading and typed config structures for Lifegrid.
//!
//! The configuration lives in `lifegrid.yaml` (or the file named by
//! `LIFEGRID_CONFIG`). This module defines strongly-typed structs that
//! mirror the YAML structure, a loader, environment overrides, and the
//! range validation the engine itself does not perform.
//!
//! ```yaml
//! codec:
//!   dead_char: "."
//!   alive_char: "*"
//!   min_width: 0
//!   min_height: 0
//! seed:
//!   source: random      # random | preset | file
//!   width: 40
//!   height: 20
//!   probability: 0.3
//! run:
//!   tick_interval_ms: 100
//!   max_generations: 0  # 0 = unlimited
//!   clear_screen: true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use lifegrid_engine::CodecOptions;
use serde::Deserialize;

/// Environment variable that overrides `run.tick_interval_ms`.
pub const ENV_TICK_INTERVAL_MS: &str = "LIFEGRID_TICK_INTERVAL_MS";

/// Environment variable that overrides `run.max_generations`.
pub const ENV_MAX_GENERATIONS: &str = "LIFEGRID_MAX_GENERATIONS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Lifegrid configuration.
///
/// Mirrors the structure of `lifegrid.yaml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LifeConfig {
    /// Cell characters and minimum grid size.
    #[serde(default)]
    pub codec: CodecOptions,

    /// Where the first generation comes from.
    #[serde(default)]
    pub seed: SeedConfig,

    /// Generation loop settings.
    #[serde(default)]
    pub run: RunConfig,
}

impl LifeConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if an override does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `LIFEGRID_*` environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a set variable is not a number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a present value is not a number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_TICK_INTERVAL_MS) {
            self.run.tick_interval_ms = parse_override(ENV_TICK_INTERVAL_MS, &val)?;
        }
        if let Some(val) = lookup(ENV_MAX_GENERATIONS) {
            self.run.max_generations = parse_override(ENV_MAX_GENERATIONS, &val)?;
        }
        Ok(())
    }

    /// Check the ranges the engine relies on its caller to enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.codec.dead_char == self.codec.alive_char {
            return Err(ConfigError::Invalid {
                field: "codec.alive_char",
                reason: format!("must differ from dead_char {:?}", self.codec.dead_char),
            });
        }

        match &self.seed {
            SeedConfig::Random {
                width,
                height,
                probability,
                ..
            } => {
                if *width == 0 {
                    return Err(ConfigError::Invalid {
                        field: "seed.width",
                        reason: String::from("must be at least 1"),
                    });
                }
                if *height == 0 {
                    return Err(ConfigError::Invalid {
                        field: "seed.height",
                        reason: String::from("must be at least 1"),
                    });
                }
                if !(0.0..=1.0).contains(probability) {
                    return Err(ConfigError::Invalid {
                        field: "seed.probability",
                        reason: format!("{probability} is outside [0, 1]"),
                    });
                }
            }
            SeedConfig::Preset { name } => {
                if name.trim().is_empty() {
                    return Err(ConfigError::Invalid {
                        field: "seed.name",
                        reason: String::from("preset name is empty"),
                    });
                }
            }
            SeedConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::Invalid {
                        field: "seed.path",
                        reason: String::from("pattern file path is empty"),
                    });
                }
            }
        }

        Ok(())
    }
}

fn parse_override(field: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|e| ConfigError::Invalid {
        field,
        reason: format!("{value:?} is not a number: {e}"),
    })
}

/// Source of the first generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Sample each cell independently.
    Random {
        /// Nominal grid width before padding.
        #[serde(default = "default_width")]
        width: usize,
        /// Nominal grid height before padding.
        #[serde(default = "default_height")]
        height: usize,
        /// Chance that any one cell starts alive.
        #[serde(default = "default_probability")]
        probability: f64,
        /// Fixed RNG seed for reproducible runs; random when absent.
        #[serde(default)]
        rng_seed: Option<u64>,
    },
    /// One of the built-in patterns, looked up by name.
    Preset {
        /// Preset name, case-insensitive.
        name: String,
    },
    /// A pattern file in the text grid format with `.` as the dead cell.
    File {
        /// Path to the pattern file.
        path: PathBuf,
    },
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::Random {
            width: default_width(),
            height: default_height(),
            probability: default_probability(),
            rng_seed: None,
        }
    }
}

/// Generation loop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Real-time milliseconds between generations.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many generations (0 = until stable).
    #[serde(default)]
    pub max_generations: u64,

    /// Clear the terminal before drawing each generation.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl RunConfig {
    /// The tick interval as a [`Duration`].
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_generations: 0,
            clear_screen: true,
        }
    }
}

const fn default_width() -> usize {
    40
}

const fn default_height() -> usize {
    20
}

const fn default_probability() -> f64 {
    0.3
}

const fn default_tick_interval_ms() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.codec.dead_char, '.');
        assert_eq!(config.codec.alive_char, '*');
        assert_eq!(config.run.tick_interval_ms, 100);
        assert_eq!(config.run.max_generations, 0);
        assert!(matches!(
            config.seed,
            SeedConfig::Random {
                width: 40,
                height: 20,
                rng_seed: None,
                ..
            }
        ));
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r##"
codec:
  dead_char: " "
  alive_char: "#"
  min_width: 10
  min_height: 5
seed:
  source: random
  width: 12
  height: 8
  probability: 0.5
  rng_seed: 7
run:
  tick_interval_ms: 250
  max_generations: 40
  clear_screen: false
"##;
        let config = LifeConfig::parse(yaml).unwrap();
        assert_eq!(config.codec.dead_char, ' ');
        assert_eq!(config.codec.alive_char, '#');
        assert_eq!(config.codec.min_width, 10);
        assert_eq!(config.codec.min_height, 5);
        assert!(matches!(
            config.seed,
            SeedConfig::Random {
                width: 12,
                height: 8,
                rng_seed: Some(7),
                ..
            }
        ));
        assert_eq!(config.run.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.run.max_generations, 40);
        assert!(!config.run.clear_screen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_yaml_fills_defaults() {
        let config = LifeConfig::parse("run:\n  max_generations: 3\n").unwrap();
        assert_eq!(config.run.max_generations, 3);
        assert_eq!(config.run.tick_interval_ms, 100);
        assert_eq!(config.codec, CodecOptions::default());
        assert_eq!(config.seed, SeedConfig::default());
    }

    #[test]
    fn parse_preset_and_file_sources() {
        let preset = LifeConfig::parse("seed:\n  source: preset\n  name: glider\n").unwrap();
        assert_eq!(
            preset.seed,
            SeedConfig::Preset {
                name: String::from("glider")
            }
        );

        let file = LifeConfig::parse("seed:\n  source: file\n  path: pats/toad.txt\n").unwrap();
        assert_eq!(
            file.seed,
            SeedConfig::File {
                path: PathBuf::from("pats/toad.txt")
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_source() {
        assert!(LifeConfig::parse("seed:\n  source: telepathy\n").is_err());
    }

    #[test]
    fn validate_rejects_probability_out_of_range() {
        let mut config = LifeConfig::default();
        config.seed = SeedConfig::Random {
            width: 5,
            height: 5,
            probability: 1.5,
            rng_seed: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "seed.probability",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let mut config = LifeConfig::default();
        config.seed = SeedConfig::Random {
            width: 0,
            height: 5,
            probability: 0.5,
            rng_seed: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "seed.width",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_identical_chars() {
        let mut config = LifeConfig::default();
        config.codec.alive_char = '.';
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_replace_run_settings() {
        let vars: BTreeMap<&str, &str> =
            [(ENV_TICK_INTERVAL_MS, "20"), (ENV_MAX_GENERATIONS, " 9 ")]
                .into_iter()
                .collect();
        let mut config = LifeConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| (*v).to_owned()))
            .unwrap();
        assert_eq!(config.run.tick_interval_ms, 20);
        assert_eq!(config.run.max_generations, 9);
    }

    #[test]
    fn bad_override_is_invalid() {
        let mut config = LifeConfig::default();
        let result = config.apply_overrides(|key| {
            (key == ENV_MAX_GENERATIONS).then(|| String::from("lots"))
        });
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: ENV_MAX_GENERATIONS,
                ..
            })
        ));
    }
}
