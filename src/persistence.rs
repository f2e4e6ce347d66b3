//! Import and export of style.conf files

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::session::EditingSession;

/// File extensions offered by the import dialog
pub const IMPORT_EXTENSIONS: &[&str] = &["conf", "txt"];

/// Whether `path` looks like something the import dialog would offer
pub fn is_importable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMPORT_EXTENSIONS.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed)))
}

/// Read a file into the session, closing every inspector window.
///
/// Only `.conf` and `.txt` files are accepted. An unreadable or rejected
/// file leaves the session untouched. A file that is read but cannot be
/// loaded leaves the session in its no-model state and is reported as an
/// error.
pub fn import_file(session: &mut EditingSession, path: &Path) -> Result<()> {
    if !is_importable(path) {
        bail!(
            "Unsupported style file {}: expected one of .{}",
            path.display(),
            IMPORT_EXTENSIONS.join(", .")
        );
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read style file {}", path.display()))?;
    session
        .import(&bytes)
        .with_context(|| format!("Failed to load style file {}", path.display()))?;
    info!(path = %path.display(), "Imported style file");
    Ok(())
}

/// Write the session's current text to `path`
pub fn export_file(session: &EditingSession, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, session.export_text()).with_context(|| format!("Failed to write style file {}", path.display()))?;
    info!(path = %path.display(), bytes = session.export_text().len(), "Exported style file");
    Ok(())
}
