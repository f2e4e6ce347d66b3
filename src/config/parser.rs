//! style.conf text ⇄ [`StyleConfig`]
//!
//! Parsing is forgiving: anything it does not understand is dropped, never
//! reported. Serialization is normalizing: fixed section order, no comments,
//! no blank lines beyond the section separators, unknown sections gone.

use std::fmt::Write;

use tracing::debug;

use super::style::{Section, StyleConfig};
use crate::constants::format::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR};

/// Parse style.conf text. Malformed lines are skipped.
pub fn parse(text: &str) -> StyleConfig {
    let mut config = StyleConfig::new();
    let mut current: Option<Section> = None;

    for line in text.split(['\r', '\n']) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if let Some(name) = section_header(line) {
            current = Section::from_name(name);
            if current.is_none() {
                debug!(section = %name, "Ignoring unknown section");
            }
            continue;
        }

        let Some(section) = current else {
            debug!(line = %line, "Dropping line outside a known section");
            continue;
        };

        match line.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) => {
                config.section_mut(section).insert(key.trim(), value.trim());
            }
            None => debug!(section = %section, line = %line, "Dropping line without separator"),
        }
    }

    config
}

/// Serialize the model back to style.conf text.
///
/// Sections come out in declaration order, keys in insertion order.
pub fn serialize(config: &StyleConfig) -> String {
    let mut output = String::new();
    for section in Section::ALL {
        // Writing to a String cannot fail
        let _ = writeln!(output, "[{section}]");
        for (key, value) in config.section(section).iter() {
            let _ = writeln!(output, "{key}{KEY_VALUE_SEPARATOR}{value}");
        }
        output.push('\n');
    }
    output.trim_end().to_string()
}

/// `[Name]` → `Name`
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::style::FullKey;
    use proptest::prelude::*;

    const SAMPLE: &str = "; comment\r\n\
        [Font]\n\
        Control=13\n\
        EditControl = 13,Consolas \n\
        \n\
        [Color]\r\n\
        ; another comment\n\
        Background=24273a\n\
        FooterProgress=ff69b4,ff1493\n\
        [Layout]\n\
        LayerHeight=26\n\
        [Format]\n\
        FooterLeft={CurrentTime} / {TotalTime}\n";

    #[test]
    fn test_parse_sample() {
        let config = parse(SAMPLE);
        assert_eq!(config.font.get("Control"), Some("13"));
        assert_eq!(config.font.get("EditControl"), Some("13,Consolas"));
        assert_eq!(config.color.get("Background"), Some("24273a"));
        assert_eq!(config.color.get("FooterProgress"), Some("ff69b4,ff1493"));
        assert_eq!(config.layout.get("LayerHeight"), Some("26"));
        assert_eq!(config.format.get("FooterLeft"), Some("{CurrentTime} / {TotalTime}"));
        assert_eq!(config.len(), 6);
    }

    #[test]
    fn test_line_before_any_header_is_dropped() {
        let config = parse("Unknown=value\n[Color]\nText=ffffff");
        assert!(config.font.is_empty());
        assert_eq!(config.color.len(), 1);
        assert_eq!(config.color.get("Unknown"), None);
    }

    #[test]
    fn test_unknown_section_drops_pairs_until_next_header() {
        let config = parse("[BogusSection]\nKey=Value\n[Layout]\nFooterHeight=24");
        assert_eq!(config.len(), 1);
        assert_eq!(config.layout.get("FooterHeight"), Some("24"));
        assert!(config.font.get("Key").is_none());
    }

    #[test]
    fn test_unknown_section_resets_current_section() {
        let config = parse("[Color]\nText=ffffff\n[Theme]\nBackground=000000");
        assert_eq!(config.color.get("Background"), None);
        assert_eq!(config.color.len(), 1);
    }

    #[test]
    fn test_line_without_separator_is_dropped() {
        let config = parse("[Color]\nJustSomeText\n=nokey\nText=fff");
        assert_eq!(config.color.len(), 2);
        assert_eq!(config.color.get(""), Some("nokey"));
    }

    #[test]
    fn test_empty_key_survives_round_trip() {
        let config = parse("[Color]\n=value\n");
        assert_eq!(config.color.get(""), Some("value"));
        assert_eq!(parse(&serialize(&config)), config);
    }

    #[test]
    fn test_split_on_first_separator_only() {
        let config = parse("[Format]\nFooterLeft=a=b");
        assert_eq!(config.format.get("FooterLeft"), Some("a=b"));
    }

    #[test]
    fn test_last_write_wins() {
        let config = parse("[Color]\nText=111111\nBorder=222222\nText=333333");
        assert_eq!(config.color.get("Text"), Some("333333"));
        assert_eq!(config.color.keys().collect::<Vec<_>>(), vec!["Text", "Border"]);
    }

    #[test]
    fn test_all_sections_present_for_empty_input() {
        let config = parse("");
        assert!(config.is_empty());
        assert_eq!(serialize(&config), "[Font]\n\n[Color]\n\n[Layout]\n\n[Format]");
    }

    #[test]
    fn test_serialize_normalizes_order_and_drops_comments() {
        let text = "[Format]\nFooterLeft=x\n; gone\n[Theme]\nA=b\n[Font]\nControl=13\n";
        let serialized = serialize(&parse(text));
        assert_eq!(
            serialized,
            "[Font]\nControl=13\n\n[Color]\n\n[Layout]\n\n[Format]\nFooterLeft=x"
        );
        assert_ne!(serialized, text);
    }

    #[test]
    fn test_round_trip_after_edit() {
        let mut config = parse(SAMPLE);
        config.set(&FullKey::new(Section::Color, "Text"), "cad3f5");
        assert_eq!(parse(&serialize(&config)), config);
    }

    fn key_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,12}"
    }

    fn value_strategy() -> impl Strategy<Value = String> {
        // Single-line values; inner '=' and ',' are legal
        "[A-Za-z0-9#,={}| /]{0,20}".prop_map(|v| v.trim().to_string())
    }

    fn document_strategy() -> impl Strategy<Value = String> {
        let section = prop::sample::select(vec!["Font", "Color", "Layout", "Format"]);
        let block = (section, prop::collection::vec((key_strategy(), value_strategy()), 0..8));
        prop::collection::vec(block, 0..6).prop_map(|blocks| {
            let mut text = String::new();
            for (section, pairs) in blocks {
                text.push_str(&format!("; {section} block\n[{section}]\n"));
                for (key, value) in pairs {
                    text.push_str(&format!("  {key} = {value}\n"));
                }
            }
            text
        })
    }

    proptest! {
        #[test]
        fn test_parse_serialize_parse_is_stable(text in document_strategy()) {
            let first = parse(&text);
            let second = parse(&serialize(&first));
            prop_assert_eq!(first, second);
        }
    }
}
