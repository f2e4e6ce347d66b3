//! Control descriptions for an inspector window
//!
//! Each bound key becomes one control, chosen from its section and current
//! value. Controls only describe what to show; writing back goes through the
//! editing session.

use serde::Serialize;

use crate::binding::{self, SelectedElement};
use crate::color::{split_tokens, ColorValue};
use crate::config::{FullKey, Section, StyleConfig};
use crate::constants::controls::*;
use crate::metadata::{self, Category};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlKind {
    /// Color picker(s); one swatch per stop
    Color {
        gradient: bool,
        swatches: Vec<String>,
    },
    /// Slider plus number input
    Number { value: u32, max: u32 },
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub full_key: String,
    pub label: String,
    /// Raw value as stored in the model
    pub value: String,
    pub kind: ControlKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlGroup {
    pub category: Category,
    pub controls: Vec<Control>,
}

/// Controls for every key of `element` present in `config`, grouped by
/// category. Keys the model does not have are skipped.
pub fn build_controls(element: &SelectedElement, config: &StyleConfig) -> Vec<ControlGroup> {
    binding::group_by_category(element)
        .into_iter()
        .filter_map(|group| {
            let controls: Vec<Control> = group
                .keys
                .iter()
                .filter_map(|full_key| build_control(full_key, config))
                .collect();
            (!controls.is_empty()).then_some(ControlGroup {
                category: group.category,
                controls,
            })
        })
        .collect()
}

fn build_control(full_key: &str, config: &StyleConfig) -> Option<Control> {
    let key: FullKey = full_key.parse().ok()?;
    let value = config.get(&key)?;
    let label = metadata::lookup(full_key).label;
    let kind = classify(&key, &label, value);
    Some(Control {
        full_key: full_key.to_string(),
        label,
        value: value.to_string(),
        kind,
    })
}

/// Pick the control type for a key
pub fn classify(key: &FullKey, label: &str, value: &str) -> ControlKind {
    let numeric = match key.section() {
        Section::Color => {
            return ControlKind::Color {
                gradient: ColorValue::parse(value).is_gradient(),
                swatches: split_tokens(value).into_iter().map(swatch).collect(),
            };
        }
        Section::Layout => true,
        Section::Font => !key.key().contains("Family"),
        Section::Format => false,
    };

    match parse_leading_int(value) {
        Some(number) if numeric => ControlKind::Number {
            value: number,
            max: number_max(label),
        },
        _ => ControlKind::Text,
    }
}

/// Slider maximum, guessed from the control label
pub fn number_max(label: &str) -> u32 {
    let label = label.to_lowercase();
    if label.contains("width") || label.contains("height") {
        MAX_DIMENSION
    } else if label.contains("size") {
        MAX_SIZE
    } else if label.contains("font") && !label.contains("family") {
        MAX_FONT
    } else if label.contains("num") {
        MAX_COUNT
    } else {
        MAX_DEFAULT
    }
}

/// Leading decimal digits of `value` (`"13,Consolas"` → 13)
pub fn parse_leading_int(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().ok()
}

/// Picker swatch for one color token: `#` plus its first six characters
pub fn swatch(token: &str) -> String {
    let token = token.trim_start_matches('#');
    let rgb: String = token.chars().take(6).collect();
    format!("#{rgb}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::find_element;
    use crate::config::{parse, DEFAULT_STYLE_CONF};

    fn key(s: &str) -> FullKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_classify_solid_color() {
        let kind = classify(&key("Color.FrameCursor"), "Frame cursor", "ff000080");
        assert_eq!(
            kind,
            ControlKind::Color {
                gradient: false,
                swatches: vec!["#ff0000".to_string()],
            }
        );
    }

    #[test]
    fn test_classify_gradient_color() {
        let kind = classify(&key("Color.FooterProgress"), "Footer progress", "ff69b4,ff1493");
        assert_eq!(
            kind,
            ControlKind::Color {
                gradient: true,
                swatches: vec!["#ff69b4".to_string(), "#ff1493".to_string()],
            }
        );
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(
            classify(&key("Layout.FooterHeight"), "Footer height", "24"),
            ControlKind::Number { value: 24, max: 500 }
        );
        assert_eq!(
            classify(&key("Font.EditControl"), "Edit control font", "13,Consolas"),
            ControlKind::Number { value: 13, max: 72 }
        );
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(
            classify(&key("Font.DefaultFamily"), "Default font family", "BIZ UDGothic"),
            ControlKind::Text
        );
        assert_eq!(
            classify(&key("Format.FooterLeft"), "Footer format (left)", "{CurrentTime}"),
            ControlKind::Text
        );
        assert_eq!(classify(&key("Layout.Odd"), "Layout.Odd", "auto"), ControlKind::Text);
    }

    #[test]
    fn test_number_max_by_label() {
        assert_eq!(number_max("Layer header width"), 500);
        assert_eq!(number_max("Scroll bar size"), 48);
        assert_eq!(number_max("Footer font"), 72);
        assert_eq!(number_max("Explorer window num"), 10);
        assert_eq!(number_max("Something"), 100);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("13,Consolas"), Some(13));
        assert_eq!(parse_leading_int("26"), Some(26));
        assert_eq!(parse_leading_int("px12"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_swatch_takes_rgb_part() {
        assert_eq!(swatch("8b451380"), "#8b4513");
        assert_eq!(swatch("#abc"), "#abc");
    }

    #[test]
    fn test_build_controls_for_footer() {
        let config = parse(DEFAULT_STYLE_CONF);
        let groups = build_controls(&find_element("app-footer").unwrap(), &config);
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec![Category::Appearance, Category::SizeAndSpacing, Category::Font]);
        assert_eq!(groups[1].controls[0].full_key, "Layout.FooterHeight");
        assert_eq!(groups[1].controls[0].kind, ControlKind::Number { value: 24, max: 500 });
    }

    #[test]
    fn test_missing_keys_are_skipped() {
        let config = parse(DEFAULT_STYLE_CONF);
        // The timeline object elements reference keys the default document lacks
        let groups = build_controls(&find_element("timeline-obj-video").unwrap(), &config);
        let keys: Vec<_> = groups
            .iter()
            .flat_map(|g| g.controls.iter().map(|c| c.full_key.as_str()))
            .collect();
        assert!(!keys.contains(&"Color.ObjectVideoSelect"));
        assert!(keys.contains(&"Color.ObjectVideo"));
    }

    #[test]
    fn test_empty_model_yields_no_groups() {
        let groups = build_controls(&find_element("app-footer").unwrap(), &StyleConfig::new());
        assert!(groups.is_empty());
    }
}
