use arboard::Clipboard;

use crate::errors::PlannerError;

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), PlannerError>;
}

/// Arboard-based clipboard implementation.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, PlannerError> {
        let clipboard = Clipboard::new().map_err(|e| PlannerError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlannerError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| PlannerError::Clipboard(e.to_string()))
    }
}
