//! Font descriptor codec
//!
//! Font entries are `"<size>[,<family>]"`. The family may itself contain
//! commas (fallback lists), so everything after the first comma is kept.

use std::fmt;

use crate::constants::format::LIST_SEPARATOR;

/// Decoded font entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Size as written; not validated as a number
    pub size: String,
    pub family: FontFamily,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFamily {
    /// No family given; the renderer uses the surrounding/system family
    Inherit,
    Named(String),
}

impl FontSpec {
    pub fn decode(raw: &str) -> Self {
        let (size, family) = match raw.split_once(LIST_SEPARATOR) {
            Some((size, family)) => (size, FontFamily::Named(family.to_string())),
            None => (raw, FontFamily::Inherit),
        };
        Self {
            size: size.to_string(),
            family,
        }
    }

    /// Size in pixels, if the size token is an integer
    pub fn size_px(&self) -> Option<u32> {
        self.size.trim().parse().ok()
    }

    pub fn family_name(&self) -> Option<&str> {
        match &self.family {
            FontFamily::Inherit => None,
            FontFamily::Named(name) => Some(name),
        }
    }

    /// Replace the size, keeping the family untouched
    pub fn with_size(&self, size: u32) -> Self {
        Self {
            size: size.to_string(),
            family: self.family.clone(),
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.family {
            FontFamily::Inherit => f.write_str(&self.size),
            FontFamily::Named(family) => write!(f, "{}{LIST_SEPARATOR}{family}", self.size),
        }
    }
}

/// Decode a raw style.conf font string
pub fn decode_font(raw: &str) -> FontSpec {
    FontSpec::decode(raw)
}
