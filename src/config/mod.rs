//! style.conf model and text format
//!
//! - **style**: the four-section in-memory model and `Section.Key` references
//! - **parser**: forgiving text parser and normalizing serializer
//! - **defaults**: the built-in default document

pub mod defaults;
pub mod parser;
pub mod style;

// Re-export commonly used types
pub use defaults::DEFAULT_STYLE_CONF;
pub use parser::{parse, serialize};
pub use style::{FullKey, Section, SectionMap, StyleConfig};
