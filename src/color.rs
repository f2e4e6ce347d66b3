//! Color value codec
//!
//! Color entries in style.conf are stored as raw strings and decoded here at
//! the point of use. Three shapes exist:
//! - `RRGGBB`: opaque color
//! - `RRGGBBAA`: color with a trailing alpha byte
//! - `C1,C2`: two-stop gradient (each stop is one of the above)
//!
//! Decoding never fails. Digits that are not valid hex are passed through
//! verbatim so the editor keeps working on hand-written files.

use std::fmt;

use crate::constants::format::LIST_SEPARATOR;

/// Tagged view of a raw color string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// Empty value, rendered transparent
    None,
    Solid(String),
    Gradient(String, String),
}

impl ColorValue {
    /// Split on commas, drop empty tokens, and classify by token count.
    ///
    /// Exactly two tokens make a gradient. Anything else is kept as a single
    /// solid token (the raw text, trimmed) so odd values survive a round trip.
    pub fn parse(raw: &str) -> Self {
        let tokens = split_tokens(raw);
        match tokens.as_slice() {
            [] => ColorValue::None,
            [from, to] => ColorValue::Gradient(from.to_string(), to.to_string()),
            [single] => ColorValue::Solid(single.to_string()),
            _ => ColorValue::Solid(raw.trim().to_string()),
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, ColorValue::Gradient(..))
    }

    /// Decode into something a renderer can paint
    pub fn render(&self) -> RenderColor {
        match self {
            ColorValue::None => RenderColor::Transparent,
            ColorValue::Solid(hex) => RenderColor::Solid(SolidColor::decode(hex)),
            ColorValue::Gradient(from, to) => RenderColor::Gradient {
                from: SolidColor::decode(from),
                to: SolidColor::decode(to),
            },
        }
    }
}

impl fmt::Display for ColorValue {
    /// Text form as stored in style.conf
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::None => Ok(()),
            ColorValue::Solid(hex) => f.write_str(hex),
            ColorValue::Gradient(from, to) => write!(f, "{from}{LIST_SEPARATOR}{to}"),
        }
    }
}

/// A single decoded color stop
#[derive(Debug, Clone, PartialEq)]
pub enum SolidColor {
    /// Raw hex digits, used verbatim (no length or digit validation)
    Opaque(String),
    /// `RRGGBBAA` with alpha normalized to 0.0..=1.0
    Translucent { red: u8, green: u8, blue: u8, alpha: f32 },
}

impl SolidColor {
    pub fn decode(hex: &str) -> Self {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() == 8 {
            if let Some((red, green, blue, alpha)) = parse_rgba(hex) {
                return SolidColor::Translucent {
                    red,
                    green,
                    blue,
                    alpha: alpha as f32 / 255.0,
                };
            }
        }
        SolidColor::Opaque(hex.to_string())
    }

    /// Alpha in 0.0..=1.0 (opaque colors report 1.0)
    pub fn alpha(&self) -> f32 {
        match self {
            SolidColor::Opaque(_) => 1.0,
            SolidColor::Translucent { alpha, .. } => *alpha,
        }
    }
}

impl fmt::Display for SolidColor {
    /// CSS-like form used by the preview and the CLI
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolidColor::Opaque(hex) => write!(f, "#{hex}"),
            SolidColor::Translucent { red, green, blue, alpha } => {
                write!(f, "rgba({red}, {green}, {blue}, {alpha:.2})")
            }
        }
    }
}

/// Decoded color ready for painting
#[derive(Debug, Clone, PartialEq)]
pub enum RenderColor {
    Transparent,
    Solid(SolidColor),
    /// Left-to-right two-stop gradient
    Gradient { from: SolidColor, to: SolidColor },
}

impl fmt::Display for RenderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderColor::Transparent => f.write_str("transparent"),
            RenderColor::Solid(color) => write!(f, "{color}"),
            RenderColor::Gradient { from, to } => {
                write!(f, "linear-gradient(to right, {from}, {to})")
            }
        }
    }
}

/// Decode a raw style.conf color string
pub fn decode_color(raw: &str) -> RenderColor {
    ColorValue::parse(raw).render()
}

/// Convert a color picker output (`#rrggbb`) back into a style.conf token.
///
/// Only the leading `#` is removed; case is left as given.
pub fn encode_color_channel(picked: &str) -> String {
    picked.strip_prefix('#').unwrap_or(picked).to_string()
}

/// Replace one stop of a gradient value, keeping the other stop in place.
///
/// Missing stops are padded with empty tokens rather than rejected.
pub fn set_gradient_stop(raw: &str, index: usize, picked: &str) -> String {
    let mut tokens: Vec<String> = split_tokens(raw).into_iter().map(str::to_string).collect();
    while tokens.len() <= index {
        tokens.push(String::new());
    }
    tokens[index] = encode_color_channel(picked);
    tokens.join(",")
}

/// Non-empty, trimmed comma-separated tokens
pub fn split_tokens(raw: &str) -> Vec<&str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_rgba(hex: &str) -> Option<(u8, u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_opaque_red() {
        assert_eq!(
            decode_color("ff0000"),
            RenderColor::Solid(SolidColor::Opaque("ff0000".to_string()))
        );
        assert_eq!(decode_color("ff0000").to_string(), "#ff0000");
    }

    #[test]
    fn test_decode_alpha_byte() {
        match decode_color("ff000080") {
            RenderColor::Solid(SolidColor::Translucent { red, green, blue, alpha }) => {
                assert_eq!((red, green, blue), (255, 0, 0));
                assert!((alpha - 0.50).abs() < 0.01);
            }
            other => panic!("expected translucent color, got {other:?}"),
        }
        assert_eq!(decode_color("ff000080").to_string(), "rgba(255, 0, 0, 0.50)");
    }

    #[test]
    fn test_decode_gradient_identical_stops() {
        let decoded = decode_color("1e66f5,1e66f5");
        let stop = SolidColor::Opaque("1e66f5".to_string());
        assert_eq!(decoded, RenderColor::Gradient { from: stop.clone(), to: stop });
        assert_eq!(
            decoded.to_string(),
            "linear-gradient(to right, #1e66f5, #1e66f5)"
        );
    }

    #[test]
    fn test_decode_gradient_stops_are_independent() {
        let decoded = decode_color("ff69b4,ff149380");
        match decoded {
            RenderColor::Gradient { from, to } => {
                assert_eq!(from.alpha(), 1.0);
                assert!((to.alpha() - 128.0 / 255.0).abs() < f32::EPSILON);
            }
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_is_transparent() {
        assert_eq!(decode_color(""), RenderColor::Transparent);
        assert_eq!(decode_color(" , ,"), RenderColor::Transparent);
        assert_eq!(decode_color("").to_string(), "transparent");
    }

    #[test]
    fn test_empty_tokens_discarded_before_counting() {
        assert_eq!(
            ColorValue::parse("abcdef,,"),
            ColorValue::Solid("abcdef".to_string())
        );
        assert!(ColorValue::parse(",123456, 654321").is_gradient());
    }

    #[test]
    fn test_malformed_hex_passes_through() {
        assert_eq!(
            decode_color("zzz"),
            RenderColor::Solid(SolidColor::Opaque("zzz".to_string()))
        );
        // 8 chars that are not hex stay verbatim instead of failing
        assert_eq!(
            decode_color("gggggggg"),
            RenderColor::Solid(SolidColor::Opaque("gggggggg".to_string()))
        );
    }

    #[test]
    fn test_three_tokens_are_not_a_gradient() {
        let value = ColorValue::parse("111111,222222,333333");
        assert!(!value.is_gradient());
        assert_eq!(value.to_string(), "111111,222222,333333");
    }

    #[test]
    fn test_color_value_display_round_trips() {
        assert_eq!(ColorValue::parse("ff69b4,ff1493").to_string(), "ff69b4,ff1493");
        assert_eq!(ColorValue::parse("24273a").to_string(), "24273a");
    }

    #[test]
    fn test_encode_color_channel_strips_hash_only() {
        assert_eq!(encode_color_channel("#AbCdEf"), "AbCdEf");
        assert_eq!(encode_color_channel("abcdef"), "abcdef");
    }

    #[test]
    fn test_set_gradient_stop_preserves_other_stop() {
        assert_eq!(set_gradient_stop("111111,222222", 1, "#333333"), "111111,333333");
        assert_eq!(set_gradient_stop("111111,222222", 0, "#333333"), "333333,222222");
    }

    #[test]
    fn test_set_gradient_stop_pads_missing_stops() {
        assert_eq!(set_gradient_stop("111111", 1, "#333333"), "111111,333333");
        assert_eq!(set_gradient_stop("", 1, "#333333"), ",333333");
    }
}
