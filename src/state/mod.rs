use serde::{Deserialize, Serialize};

/// Whether the frequency value came from the preset list or was typed in.
/// Pinned once at the input boundary; never re-derived by string comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyMode {
    #[default]
    Preset,
    Custom,
}

/// A single PDF reference document, kept in session memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Self-describing data URL: `data:application/pdf;base64,<payload>`.
    pub encoded_data: String,
    pub file_name: String,
}

/// The full form. Empty string means unset; the attachment is the only
/// optional-by-type field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub department: String,
    pub frequency: String,
    pub frequency_mode: FrequencyMode,
    pub period: String,
    pub sermon_type: String,
    pub sermon_time: String,
    pub details: String,
    pub core_theme: String,
    pub scripture: String,
    pub direction: String,
    pub attachment: Option<Attachment>,
}

/// Partial update with merge semantics: `Some` overwrites, `None` leaves the
/// field untouched. Attachment changes go through the dedicated operations
/// below, never through an update.
#[derive(Debug, Clone, Default)]
pub struct FormUpdate {
    pub department: Option<String>,
    pub frequency: Option<String>,
    pub frequency_mode: Option<FrequencyMode>,
    pub period: Option<String>,
    pub sermon_type: Option<String>,
    pub sermon_time: Option<String>,
    pub details: Option<String>,
    pub core_theme: Option<String>,
    pub scripture: Option<String>,
    pub direction: Option<String>,
}

impl FormState {
    /// Merge named fields into the current state. No validation happens
    /// here; the boundary producing the update is responsible for that.
    pub fn apply(&mut self, update: FormUpdate) {
        if let Some(v) = update.department {
            self.department = v;
        }
        if let Some(v) = update.frequency {
            self.frequency = v;
        }
        if let Some(v) = update.frequency_mode {
            self.frequency_mode = v;
        }
        if let Some(v) = update.period {
            self.period = v;
        }
        if let Some(v) = update.sermon_type {
            self.sermon_type = v;
        }
        if let Some(v) = update.sermon_time {
            self.sermon_time = v;
        }
        if let Some(v) = update.details {
            self.details = v;
        }
        if let Some(v) = update.core_theme {
            self.core_theme = v;
        }
        if let Some(v) = update.scripture {
            self.scripture = v;
        }
        if let Some(v) = update.direction {
            self.direction = v;
        }
    }

    /// Replaces any previously attached document.
    pub fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    /// Clears the attachment unconditionally; idempotent.
    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }
}
