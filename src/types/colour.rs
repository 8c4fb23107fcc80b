//! Colour type and CSS colour parsing.
//!
//! Colour-typed metadata is written into an inline `style` attribute without
//! escaping, so anything that does not parse here is rejected.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BrevError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Parse any supported CSS colour expression.
    ///
    /// Supports:
    /// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - `rgb()` / `rgba()` with integer or percentage channels
    /// - `hsl()` / `hsla()`
    /// - `hwb()`
    /// - CSS named colours and `transparent`
    pub fn parse_css(s: &str) -> Result<Self> {
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let parsed = parse_rgb(s)
            .or_else(|| parse_rgb_percent(s))
            .or_else(|| parse_hsl(s))
            .or_else(|| parse_hwb(s))
            .or_else(|| parse_named(s));

        parsed.ok_or_else(|| BrevError::Parse {
            message: format!("Invalid colour: {}", s),
            help: Some("Use a hex colour (#ff0000), rgb(), hsl(), hwb() or a CSS colour name".to_string()),
        })
    }

    /// Parse a hex colour string. The leading `#` is required.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || BrevError::Parse {
            message: format!("Invalid hex colour: {}", s),
            help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match digits[..] {
            // #RGB -> #RRGGBB
            [r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            [r, g, b, a] => Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::new(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Check whether a string is a valid colour expression.
pub fn is_colour(s: &str) -> bool {
    Colour::parse_css(s).is_ok()
}

const SEP: &str = r"(?:\s*,\s*|\s+)";
const ALPHA: &str = r"(?:\s*[,|/]\s*([+-]?[\d.]+)(%?)\s*)?";

fn rgb_regex() -> &'static Regex {
    static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
    RGB_REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^rgba?\(\s*([+-]?\d+){SEP}([+-]?\d+){SEP}([+-]?\d+){ALPHA}\)$"
        ))
        .unwrap()
    })
}

fn rgb_percent_regex() -> &'static Regex {
    static RGB_PERCENT_REGEX: OnceLock<Regex> = OnceLock::new();
    RGB_PERCENT_REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^rgba?\(\s*([+-]?[\d.]+)%{SEP}([+-]?[\d.]+)%{SEP}([+-]?[\d.]+)%{ALPHA}\)$"
        ))
        .unwrap()
    })
}

fn hsl_regex() -> &'static Regex {
    static HSL_REGEX: OnceLock<Regex> = OnceLock::new();
    HSL_REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^hsla?\(\s*([+-]?(?:\d{{0,3}}\.)?\d+)(?:deg)?{SEP}([+-]?[\d.]+)%{SEP}([+-]?[\d.]+)%{ALPHA}\)$"
        ))
        .unwrap()
    })
}

fn hwb_regex() -> &'static Regex {
    static HWB_REGEX: OnceLock<Regex> = OnceLock::new();
    HWB_REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^hwb\(\s*([+-]?\d{{0,3}}(?:\.\d+)?)(?:deg)?{SEP}([+-]?[\d.]+)%{SEP}([+-]?[\d.]+)%{ALPHA}\)$"
        ))
        .unwrap()
    })
}

fn parse_rgb(s: &str) -> Option<Colour> {
    let caps = rgb_regex().captures(s)?;
    let channel = |i: usize| -> Option<u8> {
        let v: i64 = caps.get(i)?.as_str().parse().ok()?;
        Some(v.clamp(0, 255) as u8)
    };
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()), caps.get(5).map(|m| m.as_str()))?;
    Some(Colour::new(channel(1)?, channel(2)?, channel(3)?, alpha))
}

fn parse_rgb_percent(s: &str) -> Option<Colour> {
    let caps = rgb_percent_regex().captures(s)?;
    let channel = |i: usize| -> Option<u8> {
        let v: f32 = caps.get(i)?.as_str().parse().ok()?;
        Some(unit_to_byte(v / 100.0))
    };
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()), caps.get(5).map(|m| m.as_str()))?;
    Some(Colour::new(channel(1)?, channel(2)?, channel(3)?, alpha))
}

fn parse_hsl(s: &str) -> Option<Colour> {
    use palette::{Hsl, IntoColor, Srgb};

    let caps = hsl_regex().captures(s)?;
    let hue: f32 = caps.get(1)?.as_str().parse().ok()?;
    let saturation: f32 = caps.get(2)?.as_str().parse().ok()?;
    let lightness: f32 = caps.get(3)?.as_str().parse().ok()?;
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()), caps.get(5).map(|m| m.as_str()))?;

    let hsl = Hsl::new(
        hue.rem_euclid(360.0),
        (saturation / 100.0).clamp(0.0, 1.0),
        (lightness / 100.0).clamp(0.0, 1.0),
    );
    let rgb: Srgb = hsl.into_color();
    Some(Colour::new(
        unit_to_byte(rgb.red),
        unit_to_byte(rgb.green),
        unit_to_byte(rgb.blue),
        alpha,
    ))
}

fn parse_hwb(s: &str) -> Option<Colour> {
    use palette::{Hwb, IntoColor, Srgb};

    let caps = hwb_regex().captures(s)?;
    let hue: f32 = caps.get(1)?.as_str().parse().ok()?;
    let whiteness: f32 = caps.get(2)?.as_str().parse().ok()?;
    let blackness: f32 = caps.get(3)?.as_str().parse().ok()?;
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()), caps.get(5).map(|m| m.as_str()))?;

    let hwb = Hwb::new(
        hue.rem_euclid(360.0),
        (whiteness / 100.0).clamp(0.0, 1.0),
        (blackness / 100.0).clamp(0.0, 1.0),
    );
    let rgb: Srgb = hwb.into_color();
    Some(Colour::new(
        unit_to_byte(rgb.red),
        unit_to_byte(rgb.green),
        unit_to_byte(rgb.blue),
        alpha,
    ))
}

/// Named CSS colours. Names are case-sensitive, as in CSS keyword tables.
fn parse_named(s: &str) -> Option<Colour> {
    if s == "transparent" {
        return Some(Colour::TRANSPARENT);
    }
    let named = palette::named::from_str(s)?;
    Some(Colour::rgb(named.red, named.green, named.blue))
}

/// Parse an optional alpha component: either a 0-1 fraction or a percentage.
///
/// Returns `None` only when a present alpha is not a number.
fn parse_alpha(value: Option<&str>, percent: Option<&str>) -> Option<u8> {
    let Some(value) = value else {
        return Some(255);
    };
    let mut alpha: f32 = value.parse().ok()?;
    if percent == Some("%") {
        alpha /= 100.0;
    }
    Some(unit_to_byte(alpha))
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
