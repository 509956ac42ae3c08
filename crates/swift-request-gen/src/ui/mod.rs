pub mod cli;
pub mod colors;
pub mod commands;

pub use cli::{Cli, Commands, GenCommand};
pub use colors::{Colors, Role};

fn term_width() -> u16 {
  crossterm::terminal::size().map_or(80, |(width, _)| width)
}

fn format_timestamp() -> String {
  use chrono::{Local, Timelike};

  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}
