use thiserror::Error;

/// Failure to produce a config template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
  #[error("Unsupported config format: {0} (expected toml or json)")]
  UnsupportedFormat(String),
}

/// Default configuration template in TOML, with comments on every field.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# taginject configuration file

# Where tags without their own `inject_to` go.
# One of "head", "body", "head-prepend" or "body-prepend".
inject_to = "head-prepend"

# Warn when tags bound for <head> are not valid head content.
check_head = true

# Write the resulting document here instead of stdout.
# output = "dist/index.html"

# Tags to inject. Attributes keep the order they are written in; `true`
# renders a bare attribute and `false` drops it.
[[tags]]
tag = "meta"
attrs = { charset = "utf-8" }

[[tags]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.svg" }

# [[tags]]
# tag = "script"
# attrs = { type = "module", src = "/main.js", defer = true }
# inject_to = "body"

# Children are either text or nested tags.
# [[tags]]
# tag = "noscript"
# inject_to = "body-prepend"
# children = [{ tag = "p", children = "This page needs JavaScript." }]
"#;

/// Default configuration template in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "inject_to": "head-prepend",
  "check_head": true,
  "tags": [
    {
      "tag": "meta",
      "attrs": { "charset": "utf-8" }
    },
    {
      "tag": "link",
      "attrs": { "rel": "icon", "href": "/favicon.svg" }
    }
  ]
}
"#;

/// Get the default configuration template for `format` (`toml` or `json`).
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for any other format.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
