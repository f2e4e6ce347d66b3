//! In-memory style model
//!
//! Four fixed sections, each holding arbitrary string keys. Values are kept as
//! the raw text from the file; decoding happens where a value is used.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::format::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, QUALIFIED_KEY_SEPARATOR};
use crate::error::StyleError;

/// Top-level section of style.conf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Font,
    Color,
    Layout,
    Format,
}

impl Section {
    /// Declaration order, which is also the serialization order
    pub const ALL: [Section; 4] = [Section::Font, Section::Color, Section::Layout, Section::Format];

    pub fn name(self) -> &'static str {
        match self {
            Section::Font => "Font",
            Section::Color => "Color",
            Section::Layout => "Layout",
            Section::Format => "Format",
        }
    }

    /// Exact (case-sensitive) match against the four section names
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.name() == name)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::UnknownSection(s.to_string()))
    }
}

/// `Section.Key` reference to a single value.
///
/// Outside this crate a key can only be built through [`FullKey::try_new`] or
/// `FromStr`, both of which reject keys the parser could not reproduce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullKey {
    section: Section,
    key: String,
}

impl FullKey {
    /// Unchecked constructor for keys read back from a parsed model
    pub(crate) fn new(section: Section, key: impl Into<String>) -> Self {
        Self {
            section,
            key: key.into(),
        }
    }

    pub fn try_new(section: Section, key: impl Into<String>) -> Result<Self, StyleError> {
        let key = key.into();
        if !is_valid_key(&key) {
            return Err(StyleError::MalformedKey(format!("{section}{QUALIFIED_KEY_SEPARATOR}{key}")));
        }
        Ok(Self::new(section, key))
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for FullKey {
    type Err = StyleError;

    /// Parse `Section.Key`. The key part must be something the parser could
    /// have produced itself, so writes through it always survive a round trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, key) = s
            .split_once(QUALIFIED_KEY_SEPARATOR)
            .ok_or_else(|| StyleError::MalformedKey(s.to_string()))?;
        Self::try_new(section.parse()?, key)
    }
}

impl fmt::Display for FullKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{QUALIFIED_KEY_SEPARATOR}{}", self.section, self.key)
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.trim() == key
        && !key.starts_with(COMMENT_PREFIX)
        && !key.starts_with('[')
        && !key.contains(|c: char| c == KEY_VALUE_SEPARATOR || c == QUALIFIED_KEY_SEPARATOR || c == '\r' || c == '\n')
}

/// Bring a value into the single-line, trimmed shape the parser produces
pub fn normalize_value(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Key/value pairs of one section, in insertion order.
///
/// Overwriting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Whole style.conf model
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    pub font: SectionMap,
    pub color: SectionMap,
    pub layout: SectionMap,
    pub format: SectionMap,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, section: Section) -> &SectionMap {
        match section {
            Section::Font => &self.font,
            Section::Color => &self.color,
            Section::Layout => &self.layout,
            Section::Format => &self.format,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut SectionMap {
        match section {
            Section::Font => &mut self.font,
            Section::Color => &mut self.color,
            Section::Layout => &mut self.layout,
            Section::Format => &mut self.format,
        }
    }

    pub fn get(&self, key: &FullKey) -> Option<&str> {
        self.section(key.section).get(&key.key)
    }

    /// Write a value (normalized to a single trimmed line), returning the
    /// previous one
    pub fn set(&mut self, key: &FullKey, value: &str) -> Option<String> {
        self.section_mut(key.section)
            .insert(key.key.clone(), normalize_value(value))
    }

    /// Look up a `Section.Key` string; malformed keys read as absent
    pub fn get_qualified(&self, full_key: &str) -> Option<&str> {
        let key: FullKey = full_key.parse().ok()?;
        self.section(key.section).get(&key.key)
    }

    /// Total number of keys across all sections
    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.section(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
