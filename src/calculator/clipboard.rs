//! Copying the calculator display to the system clipboard.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Put the display text on the system clipboard.
///
/// Called for the `copy` command and, when enabled, after every successful `=`.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)
}
