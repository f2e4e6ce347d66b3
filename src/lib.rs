#![forbid(unsafe_code)]

//! Editing engine for AviUtl2 `style.conf` theme files.
//!
//! The engine parses the INI-like text into a four-section model, decodes
//! color and font values, maps preview regions to the keys they expose and
//! manages the inspector windows used to edit them. All edits go through an
//! [`EditingSession`], which keeps the raw text in step with the model.

pub mod binding;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod inspector;
pub mod metadata;
pub mod palette;
pub mod persistence;
pub mod session;
pub mod settings;

pub use color::{decode_color, encode_color_channel, ColorValue, RenderColor, SolidColor};
pub use config::{parse, serialize, FullKey, Section, StyleConfig, DEFAULT_STYLE_CONF};
pub use error::{PaletteError, StyleError};
pub use font::{decode_font, FontFamily, FontSpec};
pub use inspector::{Activation, InspectorManager, InspectorWindow, Position, Size, WindowId};
pub use session::EditingSession;
pub use settings::EditorSettings;
