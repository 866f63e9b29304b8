//! Configuration management for the resume ATS tool

use crate::error::{Result, ResumeAtsError};
use crate::processing::keywords::{KeywordExtractor, DEFAULT_MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub min_length: usize,
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_bytes: u64,
    pub enable_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                min_length: DEFAULT_MIN_LENGTH,
                extra_stop_words: Vec::new(),
            },
            input: InputConfig {
                max_file_bytes: 5 * 1024 * 1024,
                enable_cache: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load a config file, writing defaults on first run
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeAtsError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.min_length == 0 {
            return Err(ResumeAtsError::Configuration(
                "extraction.min_length must be at least 1".to_string(),
            ));
        }
        if self.input.max_file_bytes == 0 {
            return Err(ResumeAtsError::Configuration(
                "input.max_file_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a keyword extractor from the extraction settings
    pub fn extractor(&self) -> KeywordExtractor {
        KeywordExtractor::with_options(
            self.extraction.min_length,
            &self.extraction.extra_stop_words,
        )
    }

    /// Set a value by dotted key, e.g. `extraction.min_length`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "extraction.min_length" => {
                self.extraction.min_length = parse_value(key, value)?;
            }
            "extraction.extra_stop_words" => {
                self.extraction.extra_stop_words = value
                    .split(',')
                    .map(|word| word.trim().to_lowercase())
                    .filter(|word| !word.is_empty())
                    .collect();
            }
            "input.max_file_bytes" => {
                self.input.max_file_bytes = parse_value(key, value)?;
            }
            "input.enable_cache" => {
                self.input.enable_cache = parse_value(key, value)?;
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeAtsError::Configuration)?;
            }
            "output.detailed" => {
                self.output.detailed = parse_value(key, value)?;
            }
            "output.color_output" => {
                self.output.color_output = parse_value(key, value)?;
            }
            _ => {
                return Err(ResumeAtsError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }

        self.validate()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ResumeAtsError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.extraction.min_length, 3);
        assert!(config.extraction.extra_stop_words.is_empty());
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("extraction.min_length", "4").unwrap();
        config.set_value("extraction.extra_stop_words", "Team, candidate").unwrap();
        config.set_value("output.format", "json").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.extraction.min_length, 4);
        assert_eq!(reloaded.extraction.extra_stop_words, vec!["team", "candidate"]);
        assert_eq!(reloaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();

        assert!(config.set_value("extraction.min_length", "three").is_err());
        assert!(config.set_value("extraction.min_length", "0").is_err());
        assert!(config.set_value("output.format", "pdf").is_err());
        assert!(config.set_value("scoring.weight", "1").is_err());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "extraction = 12").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeAtsError::Configuration(_))
        ));
    }

    #[test]
    fn test_extractor_uses_settings() {
        let mut config = Config::default();
        config.extraction.extra_stop_words = vec!["python".to_string()];

        let extractor = config.extractor();
        assert!(extractor.is_stop_word("python"));
        assert_eq!(extractor.min_length(), 3);
    }
}
