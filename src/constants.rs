//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the editor, providing a single source of truth for constant values.

/// style.conf text format markers
pub mod format {
    /// Comment line prefix
    pub const COMMENT_PREFIX: char = ';';

    /// Separator between key and value (first occurrence only)
    pub const KEY_VALUE_SEPARATOR: char = '=';

    /// Separator between gradient stops and between font size and family
    pub const LIST_SEPARATOR: char = ',';

    /// Separator inside a fully-qualified key (`Section.Key`)
    pub const QUALIFIED_KEY_SEPARATOR: char = '.';
}

/// Inspector window placement constants
pub mod inspector {
    /// Default inspector window width in pixels
    pub const WINDOW_WIDTH: i32 = 380;

    /// Default inspector window height in pixels (used for viewport clamping)
    pub const WINDOW_HEIGHT: i32 = 480;

    /// Horizontal distance of the spawn anchor from the right viewport edge
    pub const SPAWN_RIGHT_INSET: i32 = 420;

    /// Vertical position of the spawn anchor
    pub const SPAWN_TOP: i32 = 60;

    /// Minimum x for a freshly spawned window
    pub const SPAWN_MIN_X: i32 = 10;

    /// Diagonal offset between successive spawned windows
    pub const SPAWN_STEP: i32 = 30;

    /// Number of windows after which the diagonal stacking wraps around
    pub const SPAWN_WRAP: usize = 5;
}

/// Default viewport used when no editor settings exist
pub mod viewport {
    pub const DEFAULT_WIDTH: i32 = 1920;
    pub const DEFAULT_HEIGHT: i32 = 1080;
}

/// Limits applied when loading editor settings
pub mod validation {
    /// Smallest accepted viewport or window dimension
    pub const MIN_DIMENSION: i32 = 100;

    /// Largest accepted viewport or window dimension
    pub const MAX_DIMENSION: i32 = 16384;
}

/// Slider ranges for numeric inspector controls
pub mod controls {
    pub const MAX_DEFAULT: u32 = 100;
    pub const MAX_DIMENSION: u32 = 500;
    pub const MAX_SIZE: u32 = 48;
    pub const MAX_FONT: u32 = 72;
    pub const MAX_COUNT: u32 = 10;
}

/// Palette generation constants
pub mod palette {
    /// Color roles whose value is stored as a two-stop gradient
    pub const GRADIENT_ROLES: &[&str] = &[
        "ObjectVideo",
        "ObjectAudio",
        "ObjectControl",
        "ObjectVideoFilter",
        "ObjectAudioFilter",
        "FooterProgress",
    ];

    /// Typed key sequence that opens the palette dialog
    pub const TRIGGER_SEQUENCE: &str = "AICOLOR";

    /// Prompt used when the dialog opens
    pub const DEFAULT_PROMPT: &str =
        "Cyberpunk city at night, with neon blues, purples, and pinks against a deep dark background.";
}

/// Editor settings file location
pub mod config {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "style-conf-editor";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}
