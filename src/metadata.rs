//! Key metadata registry
//!
//! Static labels and display categories for known `Section.Key` entries.
//! Only used for grouping and labeling inspector controls; a key missing from
//! this table is still fully editable.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// Display group for inspector controls.
///
/// Variant order is the display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Appearance,
    SizeAndSpacing,
    Font,
    Other,
}

impl Category {
    pub const ORDER: [Category; 4] = [
        Category::Appearance,
        Category::SizeAndSpacing,
        Category::Font,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Appearance => "Appearance",
            Category::SizeAndSpacing => "Size & Spacing",
            Category::Font => "Font",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMetadata {
    pub label: String,
    pub category: Category,
}

use Category::{Appearance as A, Font as F, Other as O, SizeAndSpacing as S};

const ENTRIES: &[(&str, &str, Category)] = &[
    ("Font.DefaultFamily", "Default font family", F),
    ("Font.Control", "Control font", F),
    ("Font.EditControl", "Edit control font", F),
    ("Font.PreviewTime", "Preview time font", F),
    ("Font.LayerObject", "Layer/object font", F),
    ("Font.TimeGauge", "Time gauge font", F),
    ("Font.Footer", "Footer font", F),
    ("Font.TextEdit", "Text edit font", F),
    ("Font.Log", "Log font", F),
    ("Color.Background", "Background", A),
    ("Color.WindowBorder", "Window border", A),
    ("Color.WindowSeparator", "Window separator", A),
    ("Color.Footer", "Footer background", A),
    ("Color.FooterProgress", "Footer progress", A),
    ("Color.Grouping", "Group background", A),
    ("Color.GroupingHover", "Group background (hover)", A),
    ("Color.GroupingSelect", "Group background (selected)", A),
    ("Color.TitleHeader", "Title header background", A),
    ("Color.BorderSelect", "Border (selected)", A),
    ("Color.Border", "Border", A),
    ("Color.BorderFocus", "Border (focused)", A),
    ("Color.Text", "Text", A),
    ("Color.TextDisable", "Text (disabled)", A),
    ("Color.TextSelect", "Text (selected)", A),
    ("Color.ButtonBody", "Button", A),
    ("Color.ButtonBodyHover", "Button (hover)", A),
    ("Color.ButtonBodyPress", "Button (pressed)", A),
    ("Color.ButtonBodyDisable", "Button (disabled)", A),
    ("Color.ButtonBodySelect", "Button (selected)", A),
    ("Color.SliderCursor", "Slider cursor", A),
    ("Color.TrackBarRange", "Track bar range", A),
    ("Color.ZoomGauge", "Zoom gauge", A),
    ("Color.ZoomGaugeHover", "Zoom gauge (hover)", A),
    ("Color.ZoomGaugeOff", "Zoom gauge (off)", A),
    ("Color.ZoomGaugeOffHover", "Zoom gauge (off, hover)", A),
    ("Color.FrameCursor", "Frame cursor", A),
    ("Color.FrameCursorWide", "Frame cursor (wide)", A),
    ("Color.PlayerCursor", "Playhead", A),
    ("Color.GuideLine", "Guide line", A),
    ("Color.Layer", "Layer background", A),
    ("Color.LayerHeader", "Layer header", A),
    ("Color.LayerHover", "Layer (hover)", A),
    ("Color.LayerDisable", "Layer (disabled)", A),
    ("Color.LayerRange", "Layer range", A),
    ("Color.LayerRangeFrame", "Layer range frame", A),
    ("Color.ObjectVideo", "Video object", A),
    ("Color.ObjectAudio", "Audio object", A),
    ("Color.ObjectControl", "Control object", A),
    ("Color.ObjectVideoFilter", "Video filter object", A),
    ("Color.ObjectAudioFilter", "Audio filter object", A),
    ("Color.ObjectHover", "Object (hover)", A),
    ("Color.ObjectFocus", "Object (focused)", A),
    ("Color.ObjectSection", "Object section", A),
    ("Color.ClippingObject", "Clipping object", A),
    ("Color.ClippingObjectMask", "Clipping object mask", A),
    ("Color.Anchor", "Anchor frame", A),
    ("Color.AnchorLine", "Anchor line", A),
    ("Color.AnchorIn", "Anchor frame (start)", A),
    ("Color.AnchorOut", "Anchor frame (end)", A),
    ("Color.AnchorHover", "Anchor frame (hover)", A),
    ("Color.AnchorSelect", "Anchor frame (selected)", A),
    ("Color.AnchorEdge", "Anchor frame edge", A),
    ("Color.CenterGroup", "Group center point", A),
    ("Color.HandleX", "X handle", A),
    ("Color.HandleY", "Y handle", A),
    ("Color.HandleZ", "Z handle", A),
    ("Color.HandleXHover", "X handle (hover)", A),
    ("Color.HandleYHover", "Y handle (hover)", A),
    ("Color.HandleZHover", "Z handle (hover)", A),
    ("Color.OutsideDisplay", "Outside display area", A),
    ("Layout.WindowSeparatorSize", "Window separator size", S),
    ("Layout.ScrollBarSize", "Scroll bar size", S),
    ("Layout.FooterHeight", "Footer height", S),
    ("Layout.TitleHeaderHeight", "Title header height", S),
    ("Layout.TimeGaugeHeight", "Time gauge height", S),
    ("Layout.LayerHeight", "Layer height", S),
    ("Layout.LayerHeaderWidth", "Layer header width", S),
    ("Layout.SettingItemHeaderWidth", "Setting item header width", S),
    ("Layout.SettingItemHeight", "Setting item height", S),
    ("Layout.SettingItemMarginWidth", "Setting item margin width", S),
    ("Layout.SettingHeaderHeight", "Setting header height", S),
    ("Layout.PlayerControlHeight", "Player control height", S),
    ("Layout.ExplorerHeaderHeight", "Explorer header height", S),
    ("Layout.ExplorerWindowNum", "Explorer window num", S),
    ("Layout.ListItemHeight", "List item height", S),
    ("Format.FooterLeft", "Footer format (left)", O),
    ("Format.FooterRight", "Footer format (right)", O),
];

static REGISTRY: LazyLock<HashMap<&'static str, (&'static str, Category)>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|(key, label, category)| (*key, (*label, *category)))
        .collect()
});

/// Label and category for a `Section.Key`, falling back to the raw key and
/// [`Category::Other`]
pub fn lookup(full_key: &str) -> KeyMetadata {
    match REGISTRY.get(full_key) {
        Some((label, category)) => KeyMetadata {
            label: label.to_string(),
            category: *category,
        },
        None => KeyMetadata {
            label: full_key.to_string(),
            category: Category::Other,
        },
    }
}

/// Whether the key has an entry of its own
pub fn is_known(full_key: &str) -> bool {
    REGISTRY.contains_key(full_key)
}
