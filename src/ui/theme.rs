use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_dim: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub card_fg: String,
    pub played_fg: String,
    pub played_bg: String,
    pub cursor_fg: String,
    pub cursor_bg: String,
    pub category_1: String,
    pub category_2: String,
    pub category_3: String,
    pub category_4: String,
    pub category_default: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir.join("tafel").join("themes").join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| {
                f.strip_suffix(".toml").map(|n| n.to_string())
            })
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("quiz-night").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#101423".to_string(),
            fg: "#e6e9f4".to_string(),
            text_dim: "#596080".to_string(),
            accent: "#ffd75f".to_string(),
            border: "#2a3152".to_string(),
            border_focused: "#ffd75f".to_string(),
            header_bg: "#1a2038".to_string(),
            header_fg: "#e6e9f4".to_string(),
            card_fg: "#0b0e1a".to_string(),
            played_fg: "#596080".to_string(),
            played_bg: "#181d30".to_string(),
            cursor_fg: "#101423".to_string(),
            cursor_bg: "#f5f7ff".to_string(),
            category_1: "#5fb0ff".to_string(),
            category_2: "#63d9a0".to_string(),
            category_3: "#f2a65a".to_string(),
            category_4: "#e083d8".to_string(),
            category_default: "#9aa0c0".to_string(),
            bar_filled: "#ffd75f".to_string(),
            bar_empty: "#2a3152".to_string(),
            error: "#ff6b7f".to_string(),
            warning: "#ffd75f".to_string(),
            success: "#63d9a0".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    /// Column color for a category header and its cards. Columns beyond the
    /// four palette entries all share the default color.
    pub fn category_color(&self, index: usize) -> Color {
        let hex = match index {
            0 => &self.category_1,
            1 => &self.category_2,
            2 => &self.category_3,
            3 => &self.category_4,
            _ => &self.category_default,
        };
        Self::parse_color(hex)
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_dim(&self) -> Color { Self::parse_color(&self.text_dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn card_fg(&self) -> Color { Self::parse_color(&self.card_fg) }
    pub fn played_fg(&self) -> Color { Self::parse_color(&self.played_fg) }
    pub fn played_bg(&self) -> Color { Self::parse_color(&self.played_bg) }
    pub fn cursor_fg(&self) -> Color { Self::parse_color(&self.cursor_fg) }
    pub fn cursor_bg(&self) -> Color { Self::parse_color(&self.cursor_bg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}
