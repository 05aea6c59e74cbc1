pub mod templates;

use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use taginject_core::{ApplyOptions, InjectTo, TagDescriptor};

use crate::{cli::Cli, error::TagInjectError, tags::load_tag_file};

/// Configuration for a taginject run.
///
/// Loaded from one or more TOML or JSON files, then adjusted by `--config`
/// overrides and CLI flags. Scalars are optional so that merging several
/// files only overrides what a later file actually sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Target for tags that do not carry their own `inject_to`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inject_to: Option<InjectTo>,

  /// Whether to warn about head-bound tags that are not valid head content.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub check_head: Option<bool>,

  /// Output file. `None` writes to stdout.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<PathBuf>,

  /// Tags to inject, in order.
  pub tags: Vec<TagDescriptor>,
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TagInjectError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      TagInjectError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("json") => {
        serde_json::from_str(&content).map_err(|e| {
          TagInjectError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some(ext) if ext.eq_ignore_ascii_case("toml") => {
        toml::from_str(&content).map_err(|e| {
          TagInjectError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some(_) => {
        Err(TagInjectError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(TagInjectError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from the files named on the command line (or a
  /// discovered default), apply `--config` overrides, then CLI flags.
  ///
  /// # Errors
  ///
  /// Returns an error if a config file, an override or a tag file is invalid.
  pub fn load(cli: &Cli) -> Result<Self, TagInjectError> {
    let mut config = if cli.config_files.is_empty() {
      match Self::find_config_file() {
        Some(path) => {
          log::info!("Using configuration from {}", path.display());
          Self::from_file(&path)?
        },
        None => Self::default(),
      }
    } else {
      let mut merged = Self::default();
      for path in &cli.config_files {
        log::debug!("Loading configuration from {}", path.display());
        merged.merge(Self::from_file(path)?);
      }
      merged
    };

    config.apply_overrides(&cli.config_overrides)?;
    config.merge_with_cli(cli)?;
    Ok(config)
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// [`Some`] scalars in `other` replace ours; its tags are appended after
  /// ours.
  pub fn merge(&mut self, other: Self) {
    if other.inject_to.is_some() {
      self.inject_to = other.inject_to;
    }
    if other.check_head.is_some() {
      self.check_head = other.check_head;
    }
    if other.output.is_some() {
      self.output = other.output;
    }
    self.tags.extend(other.tags);
  }

  /// Apply `KEY=VALUE` overrides.
  ///
  /// Supported keys are `inject_to`, `check_head` and `output`.
  ///
  /// # Errors
  ///
  /// Returns an error for malformed overrides, unknown keys or invalid values.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), TagInjectError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        TagInjectError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), TagInjectError> {
    match key {
      "inject_to" => self.inject_to = Some(value.parse()?),
      "check_head" => {
        let parsed = value.parse::<bool>().map_err(|_| {
          TagInjectError::Config(format!(
            "Invalid boolean for check_head: '{value}'"
          ))
        })?;
        self.check_head = Some(parsed);
      },
      "output" => {
        self.output = (!value.is_empty()).then(|| PathBuf::from(value));
      },
      _ => {
        return Err(TagInjectError::Config(format!(
          "Unknown config key: '{key}'"
        )));
      },
    }
    Ok(())
  }

  /// Apply CLI flags on top of the loaded configuration.
  ///
  /// Tag files are read here and appended after any tags from config files.
  ///
  /// # Errors
  ///
  /// Returns an error if a tag file cannot be loaded.
  pub fn merge_with_cli(&mut self, cli: &Cli) -> Result<(), TagInjectError> {
    if let Some(inject_to) = cli.inject_to()? {
      self.inject_to = Some(inject_to);
    }
    if cli.no_head_check {
      self.check_head = Some(false);
    }
    if let Some(output) = &cli.output {
      self.output = Some(output.clone());
    }
    for path in &cli.tag_files {
      let tags = load_tag_file(path)?;
      log::debug!("Loaded {} tag(s) from {}", tags.len(), path.display());
      self.tags.extend(tags);
    }
    Ok(())
  }

  /// Options to hand to [`taginject_core::apply_html_tags`].
  #[must_use]
  pub fn apply_options(&self) -> ApplyOptions {
    ApplyOptions {
      default_inject_to: self.inject_to.unwrap_or_default(),
      check_head:        self.check_head.unwrap_or(true),
    }
  }

  /// Search for a config file in the current directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Search for a config file in `dir`.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    ["taginject.toml", "taginject.json", ".taginject.toml"]
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), TagInjectError> {
    let config_content = templates::get_template(format)
      .map_err(|e| TagInjectError::Config(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      TagInjectError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
