use std::path::PathBuf;

use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{DispatchOutcome, GeneratedCode, GenerationWarning, dispatch},
  ui::{Colors, GenCommand, Role, format_timestamp},
  utils::{object_by_path, spec::load_resolved},
};

#[derive(Debug, Clone)]
pub struct GenConfig {
  pub input: PathBuf,
  pub path: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenConfig {
  pub fn from_command(input: PathBuf, command: GenCommand) -> anyhow::Result<Self> {
    let GenCommand { path, verbose, quiet } = command;

    let path = path.trim().to_string();
    if path.is_empty() {
      anyhow::bail!("A path into the spec is required, e.g. components.parameters.DmEventFieldsParameter");
    }
    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }

    Ok(Self {
      input,
      path,
      verbose,
      quiet,
    })
  }
}

/// Console reporting for one `gen` run. Everything goes to stderr so stdout
/// carries only the generated code.
struct GenLogger<'a> {
  config: &'a GenConfig,
  colors: &'a Colors,
}

impl<'a> GenLogger<'a> {
  fn new(config: &'a GenConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.get(Role::Timestamp)),
        message.with(self.colors.get(Role::Primary))
      );
    }
  }

  fn log_loading(&self) {
    self.info(&format!("Loading OpenAPI spec from: {}", self.config.input.display()));
  }

  fn log_matching(&self) {
    self.info(&format!("Matching generator for: {}", self.config.path));
  }

  fn log_generated(&self, generated: &GeneratedCode) {
    if !self.config.quiet {
      eprintln!(
        "{} {} {}",
        format_timestamp().with(self.colors.get(Role::Timestamp)),
        "Generated with".with(self.colors.get(Role::Success)),
        generated.generator.to_string().with(self.colors.get(Role::Value))
      );
    }
  }

  /// Warnings are always shown; shape diagnostics only with `--verbose`.
  fn print_warnings(&self, warnings: &[GenerationWarning]) {
    for warning in warnings {
      if warning.is_diagnostic() {
        if self.config.verbose {
          eprintln!(
            "{} {}",
            "Diagnostic:".with(self.colors.get(Role::Diagnostic)),
            warning.to_string().with(self.colors.get(Role::Diagnostic))
          );
        }
        continue;
      }

      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.get(Role::Warning)),
        warning.to_string().with(self.colors.get(Role::Primary))
      );
    }
  }

  fn log_no_match(&self) {
    eprintln!(
      "{}",
      format!("No match generator for {}", self.config.path).with(self.colors.get(Role::Warning))
    );
  }
}

pub async fn generate_code(config: GenConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenLogger::new(&config, colors);

  logger.log_loading();
  let spec = load_resolved(&config.input).await?;
  let value = object_by_path(&spec, &config.path)?;

  logger.log_matching();
  match dispatch(&config.path, value)? {
    DispatchOutcome::Generated(generated) => {
      logger.log_generated(&generated);
      logger.print_warnings(&generated.warnings);

      let mut stdout = tokio::io::stdout();
      stdout.write_all(generated.code.as_bytes()).await?;
      stdout.flush().await?;
    }
    DispatchOutcome::NoMatch { diagnostics } => {
      logger.print_warnings(&diagnostics);
      logger.log_no_match();
    }
  }

  Ok(())
}
