use ratatui::style::Color;

use crate::model::AppConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    /// Sidebar title and list headers
    pub header: Color,
    /// Pending task text
    pub text: Color,
    /// Completed task text
    pub done: Color,
    pub dim: Color,
    pub error: Color,
    pub success: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

/// Built-in theme names, in the order the settings view cycles them.
pub const THEME_NAMES: &[&str] = &[
    "Ordo Classic",
    "Dracula",
    "Solarized Dark",
    "Solarized Light",
    "Nord",
    "Gruvbox Dark",
    "Monokai",
    "One Dark",
    "Tokyo Night",
    "Matrix",
];

impl Default for Theme {
    fn default() -> Self {
        // Ordo Classic
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x10),
            header: Color::Rgb(0xFF, 0xD7, 0x00),
            text: Color::Rgb(0xE8, 0xE8, 0xE8),
            done: Color::Rgb(0x44, 0xCC, 0x66),
            dim: Color::Rgb(0x80, 0x80, 0x80),
            error: Color::Rgb(0xE0, 0x40, 0x40),
            success: Color::Rgb(0x44, 0xCC, 0x66),
            selection_bg: Color::Rgb(0x3A, 0x3A, 0x3A),
            selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Look up a built-in theme by name (case-insensitive).
pub fn named(name: &str) -> Option<Theme> {
    let base = Theme::default();
    let theme = match name.to_ascii_lowercase().as_str() {
        "ordo classic" => base,
        "dracula" => Theme {
            background: Color::Rgb(0x28, 0x2A, 0x36),
            header: Color::Rgb(0xBD, 0x93, 0xF9),
            text: Color::Rgb(0xF8, 0xF8, 0xF2),
            done: Color::Rgb(0x50, 0xFA, 0x7B),
            dim: Color::Rgb(0x62, 0x72, 0xA4),
            error: Color::Rgb(0xFF, 0x55, 0x55),
            success: Color::Rgb(0x50, 0xFA, 0x7B),
            selection_bg: Color::Rgb(0x44, 0x47, 0x5A),
            selection_fg: Color::Rgb(0xF8, 0xF8, 0xF2),
        },
        "solarized dark" => Theme {
            background: Color::Rgb(0x00, 0x2B, 0x36),
            header: Color::Rgb(0x26, 0x8B, 0xD2),
            text: Color::Rgb(0x83, 0x94, 0x96),
            done: Color::Rgb(0x85, 0x99, 0x00),
            dim: Color::Rgb(0x58, 0x6E, 0x75),
            error: Color::Rgb(0xDC, 0x32, 0x2F),
            success: Color::Rgb(0x85, 0x99, 0x00),
            selection_bg: Color::Rgb(0x07, 0x36, 0x42),
            selection_fg: Color::Rgb(0xEE, 0xE8, 0xD5),
        },
        "solarized light" => Theme {
            background: Color::Rgb(0xFD, 0xF6, 0xE3),
            header: Color::Rgb(0x26, 0x8B, 0xD2),
            text: Color::Rgb(0x65, 0x7B, 0x83),
            done: Color::Rgb(0x85, 0x99, 0x00),
            dim: Color::Rgb(0x93, 0xA1, 0xA1),
            error: Color::Rgb(0xDC, 0x32, 0x2F),
            success: Color::Rgb(0x85, 0x99, 0x00),
            selection_bg: Color::Rgb(0xEE, 0xE8, 0xD5),
            selection_fg: Color::Rgb(0x07, 0x36, 0x42),
        },
        "nord" => Theme {
            background: Color::Rgb(0x2E, 0x34, 0x40),
            header: Color::Rgb(0x88, 0xC0, 0xD0),
            text: Color::Rgb(0xD8, 0xDE, 0xE9),
            done: Color::Rgb(0xA3, 0xBE, 0x8C),
            dim: Color::Rgb(0x4C, 0x56, 0x6A),
            error: Color::Rgb(0xBF, 0x61, 0x6A),
            success: Color::Rgb(0xA3, 0xBE, 0x8C),
            selection_bg: Color::Rgb(0x3B, 0x42, 0x52),
            selection_fg: Color::Rgb(0xEC, 0xEF, 0xF4),
        },
        "gruvbox dark" => Theme {
            background: Color::Rgb(0x28, 0x28, 0x28),
            header: Color::Rgb(0xFA, 0xBD, 0x2F),
            text: Color::Rgb(0xEB, 0xDB, 0xB2),
            done: Color::Rgb(0xB8, 0xBB, 0x26),
            dim: Color::Rgb(0x92, 0x83, 0x74),
            error: Color::Rgb(0xFB, 0x49, 0x34),
            success: Color::Rgb(0xB8, 0xBB, 0x26),
            selection_bg: Color::Rgb(0x3C, 0x38, 0x36),
            selection_fg: Color::Rgb(0xFB, 0xF1, 0xC7),
        },
        "monokai" => Theme {
            background: Color::Rgb(0x27, 0x28, 0x22),
            header: Color::Rgb(0x66, 0xD9, 0xEF),
            text: Color::Rgb(0xF8, 0xF8, 0xF2),
            done: Color::Rgb(0xA6, 0xE2, 0x2E),
            dim: Color::Rgb(0x75, 0x71, 0x5E),
            error: Color::Rgb(0xF9, 0x26, 0x72),
            success: Color::Rgb(0xA6, 0xE2, 0x2E),
            selection_bg: Color::Rgb(0x3E, 0x3D, 0x32),
            selection_fg: Color::Rgb(0xF8, 0xF8, 0xF2),
        },
        "one dark" => Theme {
            background: Color::Rgb(0x28, 0x2C, 0x34),
            header: Color::Rgb(0x61, 0xAF, 0xEF),
            text: Color::Rgb(0xAB, 0xB2, 0xBF),
            done: Color::Rgb(0x98, 0xC3, 0x79),
            dim: Color::Rgb(0x5C, 0x63, 0x70),
            error: Color::Rgb(0xE0, 0x6C, 0x75),
            success: Color::Rgb(0x98, 0xC3, 0x79),
            selection_bg: Color::Rgb(0x3E, 0x44, 0x51),
            selection_fg: Color::Rgb(0xDC, 0xDF, 0xE4),
        },
        "tokyo night" => Theme {
            background: Color::Rgb(0x1A, 0x1B, 0x26),
            header: Color::Rgb(0x7A, 0xA2, 0xF7),
            text: Color::Rgb(0xC0, 0xCA, 0xF5),
            done: Color::Rgb(0x9E, 0xCE, 0x6A),
            dim: Color::Rgb(0x56, 0x5F, 0x89),
            error: Color::Rgb(0xF7, 0x76, 0x8E),
            success: Color::Rgb(0x9E, 0xCE, 0x6A),
            selection_bg: Color::Rgb(0x29, 0x2E, 0x42),
            selection_fg: Color::Rgb(0xC0, 0xCA, 0xF5),
        },
        "matrix" => Theme {
            background: Color::Rgb(0x00, 0x00, 0x00),
            header: Color::Rgb(0x00, 0xFF, 0x41),
            text: Color::Rgb(0x00, 0xCC, 0x33),
            done: Color::Rgb(0x00, 0x80, 0x20),
            dim: Color::Rgb(0x00, 0x55, 0x15),
            error: Color::Rgb(0xFF, 0x33, 0x33),
            success: Color::Rgb(0x00, 0xFF, 0x41),
            selection_bg: Color::Rgb(0x00, 0x33, 0x0D),
            selection_fg: Color::Rgb(0x99, 0xFF, 0xB3),
        },
        _ => return None,
    };
    Some(theme)
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Resolve the configured theme: named base, then `[colors]` hex
    /// overrides on top. Unknown names fall back to the default theme.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut theme = named(&config.theme).unwrap_or_default();

        for (key, value) in &config.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "header" => theme.header = color,
                    "text" => theme.text = color,
                    "done" => theme.done = color,
                    "dim" => theme.dim = color,
                    "error" => theme.error = color,
                    "success" => theme.success = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_fg" => theme.selection_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
