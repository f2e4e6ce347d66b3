//! Editing session
//!
//! Owns the one live style model, the raw text mirror of it, the inspector
//! windows and the palette dialog. Every edit goes through here so that the
//! raw text is re-serialized after each change.
//!
//! At load time the raw text is authoritative (comments and unknown sections
//! are shown as typed). After the first model edit it becomes the normalized
//! serialization of the model.

use tracing::{debug, error, info, warn};

use crate::binding::SelectedElement;
use crate::color::{encode_color_channel, set_gradient_stop};
use crate::config::{parse, serialize, FullKey, Section, StyleConfig, DEFAULT_STYLE_CONF};
use crate::constants::viewport;
use crate::error::{PaletteError, StyleError};
use crate::font::FontSpec;
use crate::inspector::controls::{build_controls, ControlGroup};
use crate::inspector::{Activation, InspectorManager, Size, WindowId};
use crate::palette::{apply_palette, KeySequenceTrigger, Palette, PaletteDialog, PaletteGenerator, PaletteRequest, Ticket};

#[derive(Debug)]
pub struct EditingSession {
    raw_text: String,
    config: Option<StyleConfig>,
    error: Option<String>,
    inspectors: InspectorManager,
    palette: PaletteDialog,
    trigger: KeySequenceTrigger,
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new(Size::new(viewport::DEFAULT_WIDTH, viewport::DEFAULT_HEIGHT))
    }
}

impl EditingSession {
    /// Session holding the built-in default document
    pub fn new(viewport: Size) -> Self {
        Self::with_inspectors(InspectorManager::new(viewport))
    }

    pub fn with_inspectors(inspectors: InspectorManager) -> Self {
        let mut session = Self {
            raw_text: String::new(),
            config: None,
            error: None,
            inspectors,
            palette: PaletteDialog::new(),
            trigger: KeySequenceTrigger::new(),
        };
        session.load_text(DEFAULT_STYLE_CONF);
        session
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Live model, absent while the last load failed
    pub fn config(&self) -> Option<&StyleConfig> {
        self.config.as_ref()
    }

    /// Message describing the last load failure
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_model(&self) -> bool {
        self.config.is_some()
    }

    pub fn inspectors(&self) -> &InspectorManager {
        &self.inspectors
    }

    pub fn inspectors_mut(&mut self) -> &mut InspectorManager {
        &mut self.inspectors
    }

    pub fn palette_dialog(&self) -> &PaletteDialog {
        &self.palette
    }

    pub fn palette_dialog_mut(&mut self) -> &mut PaletteDialog {
        &mut self.palette
    }

    /// Replace the raw text and reparse it; open windows stay open
    pub fn load_text(&mut self, text: &str) {
        let config = parse(text);
        info!(keys = config.len(), "Loaded style configuration");
        self.raw_text = text.to_string();
        self.config = Some(config);
        self.error = None;
    }

    /// Load file contents. Bytes that are not UTF-8 put the session into the
    /// no-model state; the text is kept (lossily) for display.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), StyleError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                self.load_text(text);
                Ok(())
            }
            Err(e) => {
                let err = StyleError::Load(e.to_string());
                error!(error = %err, "Failed to load style configuration");
                self.raw_text = String::from_utf8_lossy(bytes).into_owned();
                self.config = None;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// User edit of the raw text buffer
    pub fn set_raw_text(&mut self, text: &str) {
        debug!(len = text.len(), "Raw text edited");
        self.load_text(text);
    }

    /// Import a document, closing every inspector window
    pub fn import(&mut self, bytes: &[u8]) -> Result<(), StyleError> {
        info!(bytes = bytes.len(), "Importing style configuration");
        self.inspectors.reset_all();
        self.load_bytes(bytes)
    }

    /// Back to the built-in defaults, closing every inspector window
    pub fn reset(&mut self) {
        info!("Resetting to default style configuration");
        self.inspectors.reset_all();
        self.load_text(DEFAULT_STYLE_CONF);
    }

    /// Text to write out on export
    pub fn export_text(&self) -> &str {
        &self.raw_text
    }

    /// Raw value of a `Section.Key` (for copying to the clipboard)
    pub fn value(&self, full_key: &str) -> Option<&str> {
        self.config.as_ref()?.get_qualified(full_key)
    }

    /// Write a raw value and re-serialize the text
    pub fn set_value(&mut self, full_key: &str, value: &str) -> Result<(), StyleError> {
        let key: FullKey = full_key.parse()?;
        let config = self.config.as_mut().ok_or(StyleError::NoModel)?;
        config.set(&key, value);
        debug!(key = %key, value = %value, "Value updated");
        self.sync_raw_text();
        Ok(())
    }

    /// Write a color picker result (`#rrggbb`)
    pub fn set_color(&mut self, full_key: &str, picked: &str) -> Result<(), StyleError> {
        self.set_value(full_key, &encode_color_channel(picked))
    }

    /// Replace one stop of a gradient, keeping the other
    pub fn set_gradient_stop(&mut self, full_key: &str, index: usize, picked: &str) -> Result<(), StyleError> {
        let current = self.value(full_key).unwrap_or_default();
        let updated = set_gradient_stop(current, index, picked);
        self.set_value(full_key, &updated)
    }

    /// Write a numeric control. Font entries keep their family.
    pub fn set_number(&mut self, full_key: &str, number: u32) -> Result<(), StyleError> {
        let key: FullKey = full_key.parse()?;
        let value = match (key.section(), self.value(full_key)) {
            (Section::Font, Some(current)) => FontSpec::decode(current).with_size(number).to_string(),
            _ => number.to_string(),
        };
        self.set_value(full_key, &value)
    }

    pub fn activate_element(&mut self, element: SelectedElement) -> Activation {
        self.inspectors.activate(element)
    }

    /// Controls for an open window, built from the live model
    pub fn inspector_controls(&self, id: WindowId) -> Option<Vec<ControlGroup>> {
        let window = self.inspectors.get(id)?;
        let config = self.config.as_ref()?;
        Some(build_controls(&window.element, config))
    }

    /// Feed a typed key to the palette shortcut. Returns true if it opened
    /// the dialog.
    pub fn key_pressed(&mut self, key: char) -> bool {
        if self.trigger.push(key) {
            self.palette.open();
            return true;
        }
        false
    }

    pub fn begin_palette_request(&mut self) -> Result<PaletteRequest, PaletteError> {
        self.palette.begin_request()
    }

    /// Settle a palette request and merge the result if it is still wanted.
    ///
    /// Returns the color keys that were overwritten. Stale or failed
    /// responses leave the model untouched. A palette that arrives while no
    /// model is loaded fails the request inside the dialog.
    pub fn complete_palette_request(
        &mut self,
        ticket: Ticket,
        result: Result<Palette, PaletteError>,
    ) -> Result<Vec<String>, StyleError> {
        let Some(config) = self.config.as_mut() else {
            warn!(ticket = ?ticket, "Palette arrived while no model is loaded");
            self.palette.complete(ticket, result.and(Err(PaletteError::NoModel)));
            return Err(StyleError::NoModel);
        };
        let Some(palette) = self.palette.complete(ticket, result) else {
            return Ok(Vec::new());
        };
        let applied = apply_palette(config, &palette);
        info!(count = applied.len(), "Palette merged");
        self.sync_raw_text();
        Ok(applied)
    }

    /// Run one palette request end to end
    pub async fn generate_palette<G: PaletteGenerator>(&mut self, generator: &G) -> anyhow::Result<Vec<String>> {
        let request = self.begin_palette_request()?;
        let result = generator.generate(&request).await;
        let failure = result.as_ref().err().cloned();
        let applied = self.complete_palette_request(request.ticket, result)?;
        match failure {
            Some(error) => Err(error.into()),
            None => Ok(applied),
        }
    }

    fn sync_raw_text(&mut self) {
        if let Some(config) = &self.config {
            self.raw_text = serialize(config);
        }
    }
}
