use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{AnsiColor, Color as ClapColor, RgbColor, Style, Styles},
};
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

/// One color per terminal background.
struct Shade {
  dark: Color,
  light: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const TIMESTAMP: Shade = Shade {
  dark: rgb(120, 144, 156),
  light: rgb(84, 96, 110),
};
const PRIMARY: Shade = Shade {
  dark: rgb(90, 103, 216),
  light: rgb(45, 55, 150),
};
const ACCENT: Shade = Shade {
  dark: rgb(236, 112, 99),
  light: rgb(192, 57, 43),
};
const LABEL: Shade = Shade {
  dark: rgb(22, 160, 133),
  light: rgb(17, 120, 100),
};
const VALUE: Shade = Shade {
  dark: rgb(241, 196, 15),
  light: rgb(156, 100, 12),
};
const SUCCESS: Shade = Shade {
  dark: rgb(46, 204, 113),
  light: rgb(30, 132, 73),
};
const MUTED: Shade = Shade {
  dark: rgb(127, 140, 141),
  light: rgb(110, 110, 110),
};

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

pub trait IntoComfyColor {
  fn into_comfy(self) -> ComfyColor;
}

impl IntoComfyColor for Color {
  fn into_comfy(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
      Color::Black => ComfyColor::Black,
      Color::DarkGrey | Color::Grey => ComfyColor::Grey,
      Color::Red | Color::DarkRed => ComfyColor::Red,
      Color::Green | Color::DarkGreen => ComfyColor::Green,
      Color::Yellow | Color::DarkYellow => ComfyColor::Yellow,
      Color::Blue | Color::DarkBlue => ComfyColor::Blue,
      Color::Magenta | Color::DarkMagenta => ComfyColor::Magenta,
      Color::Cyan | Color::DarkCyan => ComfyColor::Cyan,
      Color::White => ComfyColor::White,
      Color::Reset => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, shade: &Shade) -> Color {
    if !self.enabled {
      return Color::Reset;
    }

    match self.theme {
      Theme::Dark => shade.dark,
      Theme::Light => shade.light,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(&TIMESTAMP)
  }

  pub const fn primary(&self) -> Color {
    self.pick(&PRIMARY)
  }

  pub const fn accent(&self) -> Color {
    self.pick(&ACCENT)
  }

  pub const fn label(&self) -> Color {
    self.pick(&LABEL)
  }

  pub const fn value(&self) -> Color {
    self.pick(&VALUE)
  }

  pub const fn success(&self) -> Color {
    self.pick(&SUCCESS)
  }

  pub const fn muted(&self) -> Color {
    self.pick(&MUTED)
  }

  const fn to_clap(color: Color) -> Option<ClapColor> {
    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      Color::Reset => None,
      _ => Some(ClapColor::Ansi(AnsiColor::White)),
    }
  }

  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.label())))
      .literal(Style::new().fg_color(Self::to_clap(colors.value())))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.muted())))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
      .valid(Style::new().fg_color(Self::to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// Reads the background color index from `COLORFGBG` (`fg;bg`). Indices 7 and
/// up are light backgrounds.
fn detect_terminal_theme() -> Theme {
  let background = std::env::var("COLORFGBG")
    .ok()
    .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()));

  match background {
    Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
    _ => Theme::Dark,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_disabled_colors_reset() {
    let colors = Colors::new(false, Theme::Light);
    assert_eq!(colors.primary(), Color::Reset);
    assert_eq!(colors.timestamp(), Color::Reset);
  }

  #[test]
  fn test_theme_selects_shade() {
    assert_eq!(Colors::new(true, Theme::Dark).accent(), ACCENT.dark);
    assert_eq!(Colors::new(true, Theme::Light).accent(), ACCENT.light);
  }

  #[test]
  fn test_explicit_modes() {
    assert!(colors_enabled(ColorMode::Always));
    assert!(!colors_enabled(ColorMode::Never));
    assert_eq!(detect_theme(ThemeMode::Light), Theme::Light);
    assert_eq!(detect_theme(ThemeMode::Dark), Theme::Dark);
  }

  #[test]
  fn test_comfy_color_conversion() {
    assert_eq!(rgb(1, 2, 3).into_comfy(), ComfyColor::Rgb { r: 1, g: 2, b: 3 });
    assert_eq!(Color::Reset.into_comfy(), ComfyColor::Reset);
  }
}
