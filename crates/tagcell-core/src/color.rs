//! Color values for colour-picker cells

use std::fmt;

use crate::error::ParseError;

/// Canonical colour value.
///
/// Colour cells accept several textual spellings; all of them normalize to
/// one of these variants and display as `#RRGGBB` (or `#RRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// RGB color with alpha channel
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an RGBA color
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Create from a hex string (`#RGB`, `#RRGGBB`, `#RRGGBBAA`, `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Color::Rgb {
                    r: rgb[0],
                    g: rgb[1],
                    b: rgb[2],
                })
            }
            6 => Some(Color::Rgb {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
            }),
            8 => Some(Color::Rgba {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Parse any accepted spelling: hex, `rgb(r, g, b)`, `rgba(r, g, b, a)`
    /// (alpha in `0..=1`) or a basic CSS colour name.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let invalid = || ParseError::InvalidColor(input.to_string());

        if let Some(color) = Self::from_name(trimmed) {
            return Ok(color);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
            return match parts.as_slice() {
                [r, g, b] => Ok(Color::Rgb {
                    r: channel(r)?,
                    g: channel(g)?,
                    b: channel(b)?,
                }),
                [r, g, b, a] => {
                    let alpha: f64 = a.parse().map_err(|_| invalid())?;
                    if !(0.0..=1.0).contains(&alpha) {
                        return Err(invalid());
                    }
                    Ok(Color::Rgba {
                        r: channel(r)?,
                        g: channel(g)?,
                        b: channel(b)?,
                        a: (alpha * 255.0).round() as u8,
                    })
                }
                _ => Err(invalid()),
            };
        }

        Self::from_hex(trimmed).ok_or_else(invalid)
    }

    /// Look up a basic CSS colour name
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "lime" => Self::GREEN,
            "green" => Color::rgb(0, 128, 0),
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" | "aqua" => Self::CYAN,
            "magenta" | "fuchsia" => Self::MAGENTA,
            "gray" | "grey" => Self::GRAY,
            "silver" => Self::LIGHT_GRAY,
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "transparent" => Color::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(color)
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        match self {
            Color::Rgb { r, g, b } => format!("{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba { r, g, b, a } => format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a),
        }
    }

    /// Convert to RGB tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb { r, g, b } | Color::Rgba { r, g, b, .. } => (*r, *g, *b),
        }
    }

    // Common colors
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const MAGENTA: Color = Color::Rgb {
        r: 255,
        g: 0,
        b: 255,
    };
    pub const GRAY: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const LIGHT_GRAY: Color = Color::Rgb {
        r: 192,
        g: 192,
        b: 192,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
