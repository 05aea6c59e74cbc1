use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const BIN_NAME: &str = "taginject";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Render shell completions and the manpage for the taginject CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Artifacts to build. Builds everything when omitted.
    #[arg(short, long, value_enum, action = clap::ArgAction::Append)]
    only: Vec<Artifact>,

    /// Shells to generate completions for.
    #[arg(long, value_enum, default_values_t = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell])]
    shells: Vec<Shell>,
  },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Artifact {
  Completions,
  Manpage,
}

fn main() -> Result<()> {
  let Commands::Dist {
    output_dir,
    only,
    shells,
  } = Xtask::parse().command;

  let wanted = |artifact: Artifact| only.is_empty() || only.contains(&artifact);

  if wanted(Artifact::Completions) {
    let dir = generate_completions(&output_dir, &shells)?;
    eprintln!("Shell completions generated in {}", dir.display());
  }
  if wanted(Artifact::Manpage) {
    let path = generate_manpage(&output_dir)?;
    eprintln!("Manpage generated at {}", path.display());
  }

  Ok(())
}

fn generate_completions(output_dir: &Path, shells: &[Shell]) -> Result<PathBuf> {
  let dir = output_dir.join("completions");
  fs::create_dir_all(&dir)
    .with_context(|| format!("Failed to create {}", dir.display()))?;

  let mut cmd = taginject::cli::Cli::command();
  for shell in shells {
    generate_to(*shell, &mut cmd, BIN_NAME, &dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
  }
  Ok(dir)
}

fn generate_manpage(output_dir: &Path) -> Result<PathBuf> {
  let dir = output_dir.join("man");
  fs::create_dir_all(&dir)
    .with_context(|| format!("Failed to create {}", dir.display()))?;

  let path = dir.join(format!("{BIN_NAME}.1"));
  let mut file = fs::File::create(&path)
    .with_context(|| format!("Failed to create {}", path.display()))?;
  Man::new(taginject::cli::Cli::command())
    .render(&mut file)
    .context("Failed to render manpage")?;
  Ok(path)
}
