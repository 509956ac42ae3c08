use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "swift-request-gen")]
#[command(
  author,
  version,
  about = "Generates Swift request classes and parameter enums from the Twitter API v2 OpenAPI spec",
  styles = Colors::clap_styles()
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Path to the OpenAPI JSON specification file
  #[arg(short, long, value_name = "FILE", default_value = "twitter_v2.json", global = true)]
  pub input: PathBuf,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate Swift code for the value at a dot separated path
  Gen(GenCommand),
  /// Print the resolved JSON at a path, or the whole spec for `*`
  Print {
    /// Dot separated path, e.g. components.parameters.DmEventFieldsParameter
    #[arg(value_name = "PATH")]
    path: Option<String>,
  },
  /// List every path a generator can handle
  List,
}

#[derive(Args, Debug, Clone)]
pub struct GenCommand {
  /// Dot separated path, e.g. paths./2/dm_events.get
  #[arg(value_name = "PATH")]
  pub path: String,

  /// Also report why the value did not match the operation shape
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress progress output (warnings and errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
