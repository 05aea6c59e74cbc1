use thiserror::Error;

/// Errors raised while building tag descriptors from user input.
///
/// Injection itself never fails; these only surface when parsing values that
/// come from configuration files or the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
  /// The string does not name one of the four injection targets.
  #[error(
    "unknown injection target `{0}`, expected one of: head, body, \
     head-prepend, body-prepend"
  )]
  UnknownInjectTo(String),
}
