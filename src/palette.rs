//! Palette generation
//!
//! A palette collaborator turns a free-text theme description into a map of
//! color roles to hex codes. The map is merged into the `Color` section in one
//! step; roles the model does not already have are ignored.
//!
//! Requests are asynchronous. The dialog hands out a ticket per request and
//! only the newest ticket may complete it. A response arriving after the
//! dialog was closed, or after a newer request was started, is dropped.

use std::collections::HashMap;
use std::future::Future;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{FullKey, Section, StyleConfig};
use crate::constants::palette::{DEFAULT_PROMPT, GRADIENT_ROLES, TRIGGER_SEQUENCE};
use crate::error::PaletteError;

/// Role → hex code, as returned by the collaborator
pub type Palette = HashMap<String, String>;

/// A color role the collaborator is asked to fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteRole {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ROLES: &[PaletteRole] = &[
    PaletteRole {
        name: "Background",
        description: "Main background color for the entire app.",
    },
    PaletteRole {
        name: "WindowSeparator",
        description: "Color for the space between panels.",
    },
    PaletteRole {
        name: "Footer",
        description: "Footer background color. Usually a bit darker or different from the main background.",
    },
    PaletteRole {
        name: "TitleHeader",
        description: "Header background color for all panels. Should contrast with the main background.",
    },
    PaletteRole {
        name: "Text",
        description: "Primary text color. Should be light for a dark theme.",
    },
    PaletteRole {
        name: "TextSelect",
        description: "Selected text color, high contrast against selection backgrounds.",
    },
    PaletteRole {
        name: "ButtonBodySelect",
        description: "Selected button background color. This should be a primary accent color.",
    },
    PaletteRole {
        name: "Layer",
        description: "Timeline layer background color. Often similar to the main background.",
    },
    PaletteRole {
        name: "ObjectVideo",
        description: "Color for video clips on the timeline. A prominent, primary accent color.",
    },
    PaletteRole {
        name: "ObjectAudio",
        description: "Color for audio clips on the timeline. A secondary accent color that pairs well with the video color.",
    },
    PaletteRole {
        name: "ObjectControl",
        description: "Color for control/effect clips. A tertiary accent color.",
    },
    PaletteRole {
        name: "PlayerCursor",
        description: "Color of the timeline playhead. Should be very visible and bright.",
    },
];

/// Response schema handed to the collaborator: a JSON object with one string
/// property per role
pub fn response_schema() -> serde_json::Value {
    let properties: serde_json::Map<String, serde_json::Value> = ROLES
        .iter()
        .map(|role| {
            (
                role.name.to_string(),
                serde_json::json!({ "type": "string", "description": role.description }),
            )
        })
        .collect();
    serde_json::json!({ "type": "object", "properties": properties })
}

/// Full instruction text for a theme concept
pub fn build_prompt(concept: &str) -> String {
    format!(
        "You are a creative UI theme designer. Create a color palette for a dark-themed video editing \
         application based on this concept: \"{concept}\". Provide colors as hex codes (e.g., #1a2b3c). \
         Ensure good contrast and a professional feel."
    )
}

/// Parse a collaborator response. Anything but a flat object of strings is
/// rejected.
pub fn parse_palette_json(text: &str) -> Result<Palette, PaletteError> {
    serde_json::from_str(text.trim()).map_err(|e| PaletteError::InvalidResponse(e.to_string()))
}

pub fn is_gradient_role(role: &str) -> bool {
    GRADIENT_ROLES.contains(&role)
}

/// Merge a palette into the `Color` section.
///
/// Only roles already present are written, in place. The first `#` of each
/// value is removed; gradient roles get the color on both stops. Returns the
/// keys that were written, sorted.
pub fn apply_palette(config: &mut StyleConfig, palette: &Palette) -> Vec<String> {
    let mut applied = Vec::new();
    for (role, value) in palette {
        if !config.color.contains_key(role) {
            debug!(role = %role, "Ignoring palette role not present in Color section");
            continue;
        }
        let hex = value.replacen('#', "", 1);
        let value = if is_gradient_role(role) {
            format!("{hex},{hex}")
        } else {
            hex
        };
        config.set(&FullKey::new(Section::Color, role.clone()), &value);
        applied.push(role.clone());
    }
    applied.sort();
    applied
}

/// Source of palettes for a theme description
pub trait PaletteGenerator {
    /// Answer `request.prompt` with a palette shaped like `request.schema`
    fn generate(&self, request: &PaletteRequest) -> impl Future<Output = Result<Palette, PaletteError>> + Send;
}

/// Generator that answers every prompt with a fixed JSON document
#[derive(Debug, Clone)]
pub struct StaticPaletteGenerator {
    response: String,
}

impl StaticPaletteGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl PaletteGenerator for StaticPaletteGenerator {
    fn generate(&self, request: &PaletteRequest) -> impl Future<Output = Result<Palette, PaletteError>> + Send {
        let roles = request.schema["properties"].as_object().map_or(0, |properties| properties.len());
        debug!(ticket = ?request.ticket, roles, "Answering palette request from static response");
        let result = parse_palette_json(&self.response);
        async move { result }
    }
}

/// Identifies one palette request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A request the caller should hand to a [`PaletteGenerator`]
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRequest {
    pub ticket: Ticket,
    pub prompt: String,
    /// JSON schema the response must follow, see [`response_schema`]
    pub schema: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestState {
    Idle,
    Loading(Ticket),
    Failed(String),
}

/// State of the palette dialog
#[derive(Debug)]
pub struct PaletteDialog {
    open: bool,
    prompt: String,
    state: RequestState,
    next_ticket: u64,
}

impl Default for PaletteDialog {
    fn default() -> Self {
        Self {
            open: false,
            prompt: DEFAULT_PROMPT.to_string(),
            state: RequestState::Idle,
            next_ticket: 1,
        }
    }
}

impl PaletteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        if !self.open {
            info!("Palette dialog opened");
        }
        self.open = true;
    }

    /// Close the dialog. A request still in flight is abandoned.
    pub fn close(&mut self) {
        if let RequestState::Loading(ticket) = self.state {
            debug!(ticket = ?ticket, "Abandoning in-flight palette request");
        }
        self.open = false;
        self.state = RequestState::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading(_))
    }

    /// Inline message for the last failed request
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Start a request for the current prompt. A request already in flight is
    /// superseded.
    pub fn begin_request(&mut self) -> Result<PaletteRequest, PaletteError> {
        if self.prompt.trim().is_empty() {
            let error = PaletteError::EmptyPrompt;
            self.state = RequestState::Failed(error.to_string());
            return Err(error);
        }
        self.open = true;
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        if let RequestState::Loading(previous) = self.state {
            debug!(previous = ?previous, ticket = ?ticket, "Superseding palette request");
        }
        self.state = RequestState::Loading(ticket);
        info!(ticket = ?ticket, "Palette request started");
        Ok(PaletteRequest {
            ticket,
            prompt: build_prompt(&self.prompt),
            schema: response_schema(),
        })
    }

    /// Settle a request. Returns the palette to merge only when `ticket` is
    /// the live request and the generator succeeded; the dialog closes in that
    /// case. Failures stay in the dialog as an inline message.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Palette, PaletteError>) -> Option<Palette> {
        if !self.open || self.state != RequestState::Loading(ticket) {
            debug!(ticket = ?ticket, "Dropping stale palette response");
            return None;
        }
        match result {
            Ok(palette) => {
                info!(ticket = ?ticket, roles = palette.len(), "Palette request completed");
                self.open = false;
                self.state = RequestState::Idle;
                Some(palette)
            }
            Err(error) => {
                warn!(ticket = ?ticket, error = %error, "Palette request failed");
                self.state = RequestState::Failed(error.to_string());
                None
            }
        }
    }
}

/// Watches typed keys for the palette shortcut.
///
/// This is a convenience shortcut only; the dialog is equally reachable
/// through [`PaletteDialog::open`].
#[derive(Debug, Default)]
pub struct KeySequenceTrigger {
    buffer: String,
}

impl KeySequenceTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns true when the last keys spell the trigger
    /// sequence (any case); the buffer is then cleared.
    pub fn push(&mut self, key: char) -> bool {
        self.buffer.push(key);
        let excess = self.buffer.chars().count().saturating_sub(TRIGGER_SEQUENCE.chars().count());
        if excess > 0 {
            self.buffer = self.buffer.chars().skip(excess).collect();
        }
        if self.buffer.eq_ignore_ascii_case(TRIGGER_SEQUENCE) {
            self.buffer.clear();
            return true;
        }
        false
    }
}
