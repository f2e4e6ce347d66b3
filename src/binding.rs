//! Element bindings
//!
//! A bindable region of the preview declares which `Section.Key` entries it
//! exposes. The preview hands a [`SelectedElement`] to the inspector manager
//! whenever the user activates a region.

use serde::Serialize;

use crate::metadata::{self, Category};

/// A bindable preview region and the keys it exposes.
///
/// Two elements are the same entity iff their `key` matches.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct SelectedElement {
    /// Opaque region id, unique per region
    pub key: String,
    /// Display name
    pub name: String,
    /// Fully-qualified keys, in display order
    pub keys: Vec<String>,
}

impl PartialEq for SelectedElement {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl SelectedElement {
    pub fn new<I, S>(key: impl Into<String>, name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            name: name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// Keys of one category, in the order the element listed them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyGroup {
    pub category: Category,
    pub keys: Vec<String>,
}

/// Partition an element's keys by category.
///
/// Groups come out in category precedence order; within a group the
/// element's order is kept. A key listed twice only appears once.
pub fn group_by_category(element: &SelectedElement) -> Vec<KeyGroup> {
    let mut groups: Vec<KeyGroup> = Vec::new();
    for full_key in &element.keys {
        if groups.iter().any(|g| g.keys.contains(full_key)) {
            continue;
        }
        let category = metadata::lookup(full_key).category;
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.keys.push(full_key.clone()),
            None => groups.push(KeyGroup {
                category,
                keys: vec![full_key.clone()],
            }),
        }
    }
    groups.sort_by_key(|g| g.category);
    groups
}

const PANEL_HEADER_KEYS: &[&str] = &[
    "Color.TitleHeader",
    "Layout.TitleHeaderHeight",
    "Font.Control",
    "Color.Text",
    "Color.WindowBorder",
];

macro_rules! timeline_object_keys {
    ($color:literal) => {
        [$color, "Color.ObjectVideoSelect", "Color.ObjectFocus", "Color.ObjectHover", "Font.LayerObject"]
    };
}

const ELEMENTS: &[(&str, &str, &[&str])] = &[
    ("window-separator", "Window separator", &["Color.WindowSeparator", "Layout.WindowSeparatorSize"]),
    ("file-explorer-header", "File explorer header", PANEL_HEADER_KEYS),
    ("file-explorer-list", "File list", &["Color.Grouping", "Font.LayerObject", "Color.Text"]),
    ("scene-list-header", "Scene list header", PANEL_HEADER_KEYS),
    ("scene-list-content", "Scene list background", &["Color.Layer", "Color.LayerHover", "Layout.ListItemHeight"]),
    (
        "scene-list-item-root",
        "Scene list item (selected)",
        &["Color.GroupingSelect", "Color.BorderSelect", "Font.LayerObject", "Color.TextSelect"],
    ),
    ("video-preview-bg", "Preview background", &["Color.OutsideDisplay"]),
    ("video-text-selection", "Preview selection", &["Color.Anchor", "Color.AnchorHover", "Color.AnchorEdge"]),
    (
        "properties-panel-header",
        "Properties panel header",
        &["Color.LayerHeader", "Layout.SettingHeaderHeight", "Font.Control", "Color.Text"],
    ),
    (
        "properties-panel-content",
        "Property items",
        &[
            "Color.ButtonBody",
            "Color.Border",
            "Layout.SettingItemHeight",
            "Layout.SettingItemHeaderWidth",
            "Font.Control",
            "Font.EditControl",
            "Color.Text",
            "Color.TextDisable",
            "Color.TrackBarRange",
        ],
    ),
    ("object-list-header", "Object list header", PANEL_HEADER_KEYS),
    (
        "object-list-wrapper",
        "Object list",
        &[
            "Color.Grouping",
            "Color.GroupingSelect",
            "Color.BorderSelect",
            "Font.LayerObject",
            "Color.Text",
            "Color.ButtonBody",
        ],
    ),
    ("timeline-panel-header", "Timeline header", PANEL_HEADER_KEYS),
    (
        "timeline-header",
        "Timeline time gauge",
        &["Color.LayerHeader", "Layout.TimeGaugeHeight", "Font.TimeGauge", "Color.PlayerCursor", "Color.Text"],
    ),
    (
        "timeline-body",
        "Timeline layers",
        &[
            "Color.Layer",
            "Color.LayerHover",
            "Layout.LayerHeight",
            "Color.WindowBorder",
            "Layout.LayerHeaderWidth",
            "Color.Text",
        ],
    ),
    ("timeline-obj-video", "Timeline object (video)", &timeline_object_keys!("Color.ObjectVideo")),
    ("timeline-obj-audio", "Timeline object (audio)", &timeline_object_keys!("Color.ObjectAudio")),
    ("timeline-obj-vfilter", "Timeline object (video filter)", &timeline_object_keys!("Color.ObjectVideoFilter")),
    ("timeline-obj-control", "Timeline object (control)", &timeline_object_keys!("Color.ObjectControl")),
    ("timeline-obj-afilter", "Timeline object (audio filter)", &timeline_object_keys!("Color.ObjectAudioFilter")),
    ("timeline-obj-text", "Timeline object (text)", &timeline_object_keys!("Color.ObjectVideo")),
    (
        "app-footer",
        "Footer",
        &["Layout.FooterHeight", "Color.Footer", "Font.Footer", "Color.Text", "Color.FooterProgress"],
    ),
];

/// Key of the pseudo-element behind the "other settings" button
pub const OTHER_SETTINGS_KEY: &str = "other-settings";

const OTHER_SETTINGS_KEYS: &[&str] = &[
    "Layout.ScrollBarSize",
    "Layout.SettingItemMarginWidth",
    "Layout.ExplorerWindowNum",
    "Format.FooterLeft",
    "Format.FooterRight",
    "Color.GuideLine",
    "Color.FrameCursor",
    "Color.FrameCursorWide",
    "Color.ClippingObject",
    "Color.ClippingObjectMask",
    "Color.AnchorIn",
    "Color.AnchorOut",
    "Color.AnchorLine",
    "Color.CenterGroup",
    "Color.HandleX",
    "Color.HandleY",
    "Color.HandleZ",
    "Color.HandleXHover",
    "Color.HandleYHover",
    "Color.HandleZHover",
    "Color.SliderCursor",
    "Color.ZoomGauge",
    "Color.ZoomGaugeHover",
    "Color.ZoomGaugeOff",
    "Color.ZoomGaugeOffHover",
];

/// Settings that have no region of their own in the preview
pub fn other_settings() -> SelectedElement {
    SelectedElement::new(OTHER_SETTINGS_KEY, "Other settings", OTHER_SETTINGS_KEYS.iter().copied())
}

/// Every bindable region of the mock preview, plus [`other_settings`]
pub fn catalog() -> Vec<SelectedElement> {
    ELEMENTS
        .iter()
        .map(|(key, name, keys)| SelectedElement::new(*key, *name, keys.iter().copied()))
        .chain(std::iter::once(other_settings()))
        .collect()
}

/// Look up a region by its id
pub fn find_element(key: &str) -> Option<SelectedElement> {
    catalog().into_iter().find(|element| element.key == key)
}
