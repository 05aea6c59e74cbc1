use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use taginject::{
  cli::{Cli, Commands},
  config::Config,
};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  if let Some(Commands::Init {
    output,
    format,
    force,
  }) = &cli.command
  {
    // Check if file already exists and that we're not forcing overwrite
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    if let Some(parent) = output.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }

    Config::generate_default_config(format, output).wrap_err_with(|| {
      format!(
        "Failed to generate configuration file: {}",
        output.display()
      )
    })?;
    return Ok(());
  }

  let Some(input) = cli.input.as_deref() else {
    bail!("No input document given. Pass a path, or `-` to read from stdin.");
  };

  let config = Config::load(&cli).wrap_err("Failed to load configuration")?;
  inject(input, &config)
}

/// Read the input document, inject the configured tags and write the result.
fn inject(input: &Path, config: &Config) -> Result<()> {
  let html = if input == Path::new("-") {
    io::read_to_string(io::stdin()).wrap_err("Failed to read stdin")?
  } else {
    fs::read_to_string(input)
      .wrap_err_with(|| format!("Failed to read {}", input.display()))?
  };

  if config.tags.is_empty() {
    log::warn!("No tags configured, document is passed through unchanged");
  }

  let result =
    taginject_core::apply_html_tags(&html, &config.tags, &config.apply_options());

  match &config.output {
    Some(path) => {
      fs::write(path, &result)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
      info!("Injected {} tag(s) into {}", config.tags.len(), path.display());
    },
    None => {
      io::stdout()
        .write_all(result.as_bytes())
        .wrap_err("Failed to write to stdout")?;
    },
  }

  Ok(())
}
