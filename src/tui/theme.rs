//! # Theme
//!
//! Colours for every screen, resolved once from `[theme]` in the config and
//! handed to the UI by value. Nothing mutates it after startup.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub dim: Color,
    pub log: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 0),
            dim: Color::Indexed(240),
            log: Color::Indexed(63),
            error: Color::Red,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Self::default();
        Self {
            accent: parse_color("accent", config.accent.as_deref(), defaults.accent),
            dim: parse_color("dim", config.dim.as_deref(), defaults.dim),
            log: parse_color("log", config.log.as_deref(), defaults.log),
            error: parse_color("error", config.error.as_deref(), defaults.error),
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn cursor(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn inactive(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn logs(&self) -> Style {
        Style::default().fg(self.log)
    }

    pub fn failure(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

fn parse_color(key: &str, value: Option<&str>, fallback: Color) -> Color {
    let Some(value) = value else {
        return fallback;
    };
    match Color::from_str(value) {
        Ok(color) => color,
        Err(_) => {
            warn!("Invalid theme colour {key} = {value:?}, using default");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::default());
    }

    #[test]
    fn test_parses_hex_name_and_index() {
        let theme = Theme::from_config(&ThemeConfig {
            accent: Some("#ff8800".to_string()),
            dim: Some("8".to_string()),
            log: Some("cyan".to_string()),
            error: None,
        });
        assert_eq!(theme.accent, Color::Rgb(255, 136, 0));
        assert_eq!(theme.dim, Color::Indexed(8));
        assert_eq!(theme.log, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
    }

    #[test]
    fn test_invalid_colour_falls_back() {
        let theme = Theme::from_config(&ThemeConfig {
            accent: Some("not-a-colour".to_string()),
            ..Default::default()
        });
        assert_eq!(theme.accent, Theme::default().accent);
    }
}
