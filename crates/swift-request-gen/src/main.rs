#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod generator;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::Gen(command) => {
      let config = ui::commands::GenConfig::from_command(cli.input, command)?;
      ui::commands::generate_code(config, &colors).await?;
    }
    Commands::Print { path } => ui::commands::print_value(&cli.input, path.as_deref()).await?,
    Commands::List => ui::commands::list_paths(&cli.input, &colors).await?,
  }

  Ok(())
}
