use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taginject_core::InjectTo;

/// Command line interface for taginject
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "taginject: splice tags into HTML without parsing it"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// HTML document to inject into. Use `-` to read from stdin.
  pub input: Option<PathBuf>,

  /// JSON or TOML file with tag descriptors (can be specified multiple
  /// times). Tags are injected in the order the files are given.
  #[arg(short = 't', long = "tags", action = clap::ArgAction::Append)]
  pub tag_files: Vec<PathBuf>,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,

  /// Target for tags that do not set their own `inject_to`.
  #[arg(short = 'i', long = "inject-to", value_parser = ["head", "body", "head-prepend", "body-prepend"])]
  pub inject_to: Option<String>,

  /// Write the resulting document here instead of stdout.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Do not warn about tags that are not allowed inside `<head>`.
  #[arg(long = "no-head-check")]
  pub no_head_check: bool,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

/// All supported subcommands for the taginject CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new taginject configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "taginject.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// The `--inject-to` value, if one was given.
  ///
  /// # Errors
  ///
  /// Returns an error if the value does not name an injection target. Clap
  /// already restricts the accepted values, so this only fails for values
  /// constructed by hand.
  pub fn inject_to(&self) -> Result<Option<InjectTo>, taginject_core::TagError> {
    self.inject_to.as_deref().map(str::parse).transpose()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_inject_options() {
    let cli = Cli::try_parse_from([
      "taginject",
      "index.html",
      "-t",
      "a.json",
      "--tags",
      "b.toml",
      "-i",
      "body-prepend",
      "--no-head-check",
      "-o",
      "out.html",
    ])
    .expect("valid arguments");

    assert!(cli.command.is_none());
    assert_eq!(cli.input, Some(PathBuf::from("index.html")));
    assert_eq!(cli.tag_files, [
      PathBuf::from("a.json"),
      PathBuf::from("b.toml")
    ]);
    assert_eq!(cli.inject_to(), Ok(Some(InjectTo::BodyPrepend)));
    assert!(cli.no_head_check);
    assert_eq!(cli.output, Some(PathBuf::from("out.html")));
  }

  #[test]
  fn test_parse_rejects_unknown_target() {
    assert!(
      Cli::try_parse_from(["taginject", "index.html", "-i", "footer"]).is_err()
    );
  }

  #[test]
  fn test_parse_init() {
    let cli = Cli::try_parse_from(["taginject", "init", "-F", "json", "-f"])
      .expect("valid arguments");

    match cli.command {
      Some(Commands::Init {
        output,
        format,
        force,
      }) => {
        assert_eq!(output, PathBuf::from("taginject.toml"));
        assert_eq!(format, "json");
        assert!(force);
      },
      None => unreachable!("init subcommand should be parsed"),
    }
  }
}
