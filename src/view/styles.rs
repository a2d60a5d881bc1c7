//! Color palette for the directory screens.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors switched on regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles shared by every widget.
///
/// With colors disabled, emphasis survives through modifiers (bold,
/// reversed) so the layout stays readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Headings, card titles and counts.
    pub title: Style,
    /// Secondary text.
    pub muted: Style,
    /// Labels and company names in the table.
    pub accent: Style,
    /// Industry badge on cards.
    pub badge: Style,
    /// Key names in hints.
    pub key_hint: Style,
    /// Active filter values.
    pub selected: Style,
    /// Error screen heading.
    pub error: Style,
    /// Unfocused borders.
    pub border: Style,
    /// Border of the focused search box.
    pub border_focused: Style,
}

impl Palette {
    /// Palette for `config`, monochrome when colors are off.
    pub fn new(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::White),
                muted: Style::default().fg(Color::Gray),
                accent: bold.fg(Color::Cyan),
                badge: Style::default().fg(Color::Black).bg(Color::LightBlue),
                key_hint: bold.fg(Color::Yellow),
                selected: Style::default().fg(Color::Black).bg(Color::Blue),
                error: bold.fg(Color::Red),
                border: Style::default().fg(Color::DarkGray),
                border_focused: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                title: bold,
                muted: Style::default(),
                accent: bold,
                badge: Style::default().add_modifier(Modifier::REVERSED),
                key_hint: bold,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                error: bold,
                border: Style::default(),
                border_focused: bold,
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
