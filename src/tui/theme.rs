use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF7, 0xF7, 0xF7),
            text: Color::Rgb(0x25, 0x25, 0x25),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            highlight: Color::Rgb(0x6C, 0x63, 0xFF),
            dim: Color::Rgb(0x8E, 0x8E, 0x93),
            red: Color::Rgb(0xE5, 0x0A, 0x0A),
            green: Color::Rgb(0x2E, 0x9E, 0x5B),
            border: Color::Rgb(0x6C, 0x63, 0xFF),
            selection_bg: Color::Rgb(0xE3, 0xE1, 0xFF),
            search_match_bg: Color::Rgb(0xFF, 0xD7, 0x00),
            search_match_fg: Color::Rgb(0x25, 0x25, 0x25),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x25, 0x25, 0x25),
            text: Color::Rgb(0xF7, 0xF7, 0xF7),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x6C, 0x63, 0xFF),
            dim: Color::Rgb(0x8E, 0x8E, 0x93),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            border: Color::Rgb(0xF7, 0xF7, 0xF7),
            selection_bg: Color::Rgb(0x3D, 0x39, 0x6B),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x25, 0x25, 0x25),
        }
    }

    /// Built-in palette for the mode with `[ui.dark]` / `[ui.light]` overrides applied
    pub fn for_mode(dark: bool, ui: &UiConfig) -> Self {
        if dark {
            Theme::dark().with_overrides(&ui.dark)
        } else {
            Theme::light().with_overrides(&ui.light)
        }
    }

    /// Unknown role names and malformed hex values are skipped
    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "highlight" => self.highlight = color,
                "dim" => self.dim = color,
                "red" => self.red = color,
                "green" => self.green = color,
                "border" => self.border = color,
                "selection_bg" => self.selection_bg = color,
                "search_match_bg" => self.search_match_bg = color,
                "search_match_fg" => self.search_match_fg = color,
                _ => {}
            }
        }
        self
    }
}

/// Parse a hex color string like "#6C63FF" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
