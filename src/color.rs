//! Color utilities: palette shading helpers and CSS color parsing
//!
//! The shading helpers are what every generator uses to derive shadow and
//! highlight tones from a base palette entry. They never fail: factors are
//! clamped to `[0, 1]` and channels to `[0, 255]`.
//!
//! Parsing supports the following formats (used by `spritegen.toml` palettes):
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `oklch()`
//! - Named: `red`, `blue`, `transparent`, etc.

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

/// Fully transparent pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Build an opaque color from RGB channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Build a color from RGBA channels.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Darken a color by `factor` (0 = unchanged, 1 = black). Alpha is preserved.
///
/// # Examples
///
/// ```
/// use spritegen::color::{darken, rgb};
///
/// assert_eq!(darken(rgb(200, 100, 50), 0.0), rgb(200, 100, 50));
/// assert_eq!(darken(rgb(200, 100, 50), 0.5), rgb(100, 50, 25));
/// assert_eq!(darken(rgb(200, 100, 50), 1.0), rgb(0, 0, 0));
/// ```
pub fn darken(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let keep = 1.0 - clamp_unit(factor);
    let [r, g, b, a] = color.0;
    Rgba([
        to_channel(r as f32 * keep),
        to_channel(g as f32 * keep),
        to_channel(b as f32 * keep),
        a,
    ])
}

/// Brighten a color toward white by `factor` of the remaining headroom.
///
/// # Examples
///
/// ```
/// use spritegen::color::{brighten, rgb};
///
/// assert_eq!(brighten(rgb(100, 0, 255), 0.0), rgb(100, 0, 255));
/// assert_eq!(brighten(rgb(100, 0, 255), 1.0), rgb(255, 255, 255));
/// ```
pub fn brighten(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let f = clamp_unit(factor);
    let [r, g, b, a] = color.0;
    let up = |c: u8| to_channel(c as f32 + (255.0 - c as f32) * f);
    Rgba([up(r), up(g), up(b), a])
}

/// Alias for [`brighten`].
pub fn lighten(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    brighten(color, factor)
}

/// Linearly interpolate between two colors, alpha included.
pub fn lerp_color(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let t = clamp_unit(t);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let from = a.0[i] as f32;
        let to = b.0[i] as f32;
        out[i] = to_channel(from + (to - from) * t);
    }
    Rgba(out)
}

/// Same color with a different alpha.
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let [r, g, b, _] = color.0;
    Rgba([r, g, b, alpha])
}

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// Parse a CSS color string into an RGBA color.
///
/// # Examples
///
/// ```
/// use spritegen::color::parse_color;
///
/// assert_eq!(parse_color("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_color("#00ff0080").unwrap(), image::Rgba([0, 255, 0, 128]));
/// assert_eq!(parse_color("blue").unwrap(), image::Rgba([0, 0, 255, 255]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    parse_css_color(s)
}

/// Parse the digits of a hex color (without the leading '#').
fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, ColorError> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgba([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255])),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            Ok(Rgba([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, a1 * 16 + a2]))
        }
        other => Err(ColorError::InvalidLength(other.len())),
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    use lightningcss::values::color::FloatColor;

    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb_color = css_color
        .to_rgb()
        .map_err(|_| ColorError::CssParse(format!("cannot convert '{}' to RGB", s)))?;

    match rgb_color {
        CssColor::RGBA(c) => Ok(Rgba([c.red, c.green, c.blue, c.alpha])),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(c) => Ok(Rgba([
                to_channel(c.r * 255.0),
                to_channel(c.g * 255.0),
                to_channel(c.b * 255.0),
                to_channel(c.alpha * 255.0),
            ])),
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}
