use std::io;

use taginject_core::TagError;
use thiserror::Error;

/// Top-level error type for the taginject crate.
#[derive(Debug, Error)]
pub enum TagInjectError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("Tag error: {0}")]
  Tag(#[from] TagError),
}
