use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of console output means; each role has a dark and a light shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  Primary,
  Warning,
  Diagnostic,
  Success,
  Label,
  Value,
}

impl Role {
  const fn rgb(self, theme: Theme) -> (u8, u8, u8) {
    match (self, theme) {
      (Self::Timestamp, Theme::Dark) => (118, 166, 166),
      (Self::Timestamp, Theme::Light) => (92, 62, 38),
      (Self::Primary, Theme::Dark) => (191, 126, 4),
      (Self::Primary, Theme::Light) => (70, 42, 25),
      (Self::Warning, Theme::Dark) => (166, 84, 55),
      (Self::Warning, Theme::Light) => (211, 99, 70),
      (Self::Diagnostic, Theme::Dark) => (128, 128, 128),
      (Self::Diagnostic, Theme::Light) => (110, 110, 110),
      (Self::Success, Theme::Dark) => (118, 166, 166),
      (Self::Success, Theme::Light) => (34, 142, 90),
      (Self::Label, Theme::Dark) => (217, 164, 4),
      (Self::Label, Theme::Light) => (176, 103, 66),
      (Self::Value, Theme::Dark) => (242, 211, 56),
      (Self::Value, Theme::Light) => (199, 146, 76),
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  pub const fn get(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = role.rgb(self.theme);
    Color::Rgb { r, g, b }
  }

  /// Same color for a comfy-table cell.
  pub const fn comfy(&self, role: Role) -> ComfyColor {
    match self.get(role) {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      _ => ComfyColor::Reset,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, RgbColor, Style, Styles};

    const fn style(role: Role) -> Style {
      let (r, g, b) = role.rgb(Theme::Dark);
      Style::new().fg_color(Some(ClapColor::Rgb(RgbColor(r, g, b))))
    }

    Styles::styled()
      .header(style(Role::Label).bold().underline())
      .usage(style(Role::Label).bold())
      .literal(style(Role::Success))
      .placeholder(style(Role::Timestamp))
      .error(style(Role::Warning).bold())
      .valid(style(Role::Success))
      .invalid(style(Role::Warning).bold())
  }
}

/// Console output goes to stderr, so that is the stream checked for a terminal.
pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stderr().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  if let Ok(profile) = std::env::var("ITERM_PROFILE")
    && profile.to_lowercase().contains("light")
  {
    return Theme::Light;
  }

  Theme::Dark
}
