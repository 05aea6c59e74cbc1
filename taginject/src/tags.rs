use std::{fs, path::Path};

use serde::Deserialize;
use taginject_core::TagDescriptor;

use crate::error::TagInjectError;

/// Accepted layouts of a tag file.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagFile {
  /// A bare list of descriptors (JSON only).
  List(Vec<TagDescriptor>),
  /// `{ "tags": [...] }` in JSON or `[[tags]]` tables in TOML.
  Table { tags: Vec<TagDescriptor> },
}

impl From<TagFile> for Vec<TagDescriptor> {
  fn from(file: TagFile) -> Self {
    match file {
      TagFile::List(tags) | TagFile::Table { tags } => tags,
    }
  }
}

/// Read tag descriptors from a JSON or TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON/TOML, or
/// has an unsupported extension.
pub fn load_tag_file(path: &Path) -> Result<Vec<TagDescriptor>, TagInjectError> {
  let content = fs::read_to_string(path)?;

  let file: TagFile = match path.extension().and_then(|ext| ext.to_str()) {
    Some(ext) if ext.eq_ignore_ascii_case("json") => {
      serde_json::from_str(&content)?
    },
    Some(ext) if ext.eq_ignore_ascii_case("toml") => toml::from_str(&content)?,
    _ => {
      return Err(TagInjectError::Config(format!(
        "Unsupported tag file format: {} (expected .json or .toml)",
        path.display()
      )));
    },
  };

  Ok(file.into())
}
