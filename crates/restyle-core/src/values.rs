//! Value normalization: lengths and colors in the form resolved styles use.

use once_cell::sync::Lazy;
use regex::Regex;

static LENGTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))(px|em|rem|pt|%)?$").expect("valid length regex")
});

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid hex regex"));

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*([\d.]+)\s*[,\s]\s*([\d.]+)\s*[,\s]\s*([\d.]+)\s*(?:[,/]\s*([\d.]+%?)\s*)?\)$")
        .expect("valid rgb regex")
});

/// Length units understood by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Em,
    Rem,
    Pt,
    Percent,
    /// A bare number (`0`, or a `line-height` factor)
    Number,
}

/// A parsed CSS length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Length {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_ascii_lowercase();
        let caps = LENGTH_RE.captures(&text)?;
        let value: f32 = caps.get(1)?.as_str().parse().ok()?;
        let unit = match caps.get(2).map(|m| m.as_str()) {
            None => Unit::Number,
            Some("px") => Unit::Px,
            Some("em") => Unit::Em,
            Some("rem") => Unit::Rem,
            Some("pt") => Unit::Pt,
            Some("%") => Unit::Percent,
            Some(_) => return None,
        };
        Some(Self { value, unit })
    }

    /// Resolve to pixels. `em` is relative to `font_size`, `%` to `percent_base`.
    /// A bare number only resolves when it is zero.
    pub fn to_px(self, font_size: f32, root_font_size: f32, percent_base: f32) -> Option<f32> {
        match self.unit {
            Unit::Px => Some(self.value),
            Unit::Em => Some(self.value * font_size),
            Unit::Rem => Some(self.value * root_font_size),
            Unit::Pt => Some(self.value * 4.0 / 3.0),
            Unit::Percent => Some(self.value * percent_base / 100.0),
            Unit::Number if self.value == 0.0 => Some(0.0),
            Unit::Number => None,
        }
    }
}

/// Format a pixel amount the way resolved styles print it (`16px`, `21.44px`)
pub fn format_px(px: f32) -> String {
    format!("{}px", format_number(px))
}

/// Print a number with at most three decimals and no trailing zeros
pub fn format_number(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Parse a pixel value previously produced by [`format_px`]
pub fn parse_px(text: &str) -> Option<f32> {
    text.trim().strip_suffix("px")?.parse().ok()
}

/// Named colors recognized by [`normalize_color`]
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("lime", (0, 255, 0)),
    ("aqua", (0, 255, 255)),
    ("fuchsia", (255, 0, 255)),
];

/// Normalize a color to `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Returns `None` for anything that is not a hex, `rgb()`/`rgba()`, named
/// color or `transparent`.
pub fn normalize_color(value: &str) -> Option<String> {
    let value = value.trim().to_ascii_lowercase();

    if value == "transparent" {
        return Some(format_rgba(0, 0, 0, 0.0));
    }
    if let Some((_, (r, g, b))) = NAMED_COLORS.iter().find(|(name, _)| *name == value) {
        return Some(format_rgba(*r, *g, *b, 1.0));
    }
    if let Some(caps) = HEX_RE.captures(&value) {
        return parse_hex(caps.get(1)?.as_str());
    }
    if let Some(caps) = RGB_RE.captures(&value) {
        let channel = |i: usize| -> Option<u8> {
            let v: f32 = caps.get(i)?.as_str().parse().ok()?;
            Some(v.round().clamp(0.0, 255.0) as u8)
        };
        let alpha = match caps.get(4) {
            None => 1.0,
            Some(m) => match m.as_str().strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => m.as_str().parse().ok()?,
            },
        };
        return Some(format_rgba(channel(1)?, channel(2)?, channel(3)?, alpha));
    }
    None
}

/// Whether a token can stand for a color in a shorthand
pub fn is_color(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    normalize_color(&lower).is_some()
        || lower == "currentcolor"
        || lower.starts_with("hsl(")
        || lower.starts_with("hsla(")
}

fn parse_hex(digits: &str) -> Option<String> {
    let expanded: String = if digits.len() <= 4 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let byte = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    let alpha = match expanded.len() {
        8 => f32::from(byte(6)?) / 255.0,
        _ => 1.0,
    };
    Some(format_rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
}

fn format_rgba(r: u8, g: u8, b: u8, alpha: f32) -> String {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha >= 1.0 {
        format!("rgb({}, {}, {})", r, g, b)
    } else {
        let alpha = (alpha * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {})", r, g, b, format_number(alpha))
    }
}
