//! System clipboard access for copying hex codes.

use anyhow::{Context, Result};

/// Copies text to the system clipboard.
///
/// The `arboard` handle is opened on first use, so a terminal without a
/// display server only fails when the user actually copies something.
#[derive(Default)]
pub struct HexClipboard {
    backend: Option<arboard::Clipboard>,
}

impl HexClipboard {
    /// Create a clipboard without touching the system clipboard yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { backend: None }
    }

    /// Copy `text` to the system clipboard.
    ///
    /// Returns the status message to show.
    pub fn copy(&mut self, text: &str) -> Result<String> {
        if self.backend.is_none() {
            self.backend =
                Some(arboard::Clipboard::new().context("System clipboard is not available")?);
        }
        if let Some(backend) = self.backend.as_mut() {
            backend
                .set_text(text.to_string())
                .context("Failed to write to the clipboard")?;
        }

        Ok(copied_message(text))
    }
}

impl std::fmt::Debug for HexClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HexClipboard")
            .field("open", &self.backend.is_some())
            .finish()
    }
}

/// Status line for a successful copy.
#[must_use]
pub fn copied_message(text: &str) -> String {
    format!("Copied! {text}")
}
