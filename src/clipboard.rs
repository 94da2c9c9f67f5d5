use tracing::{debug, warn};

use crate::error::ClipboardError;

/// Copy `s` to the system clipboard.
///
/// This is a thin wrapper around the `arboard` crate. On some platforms or in
/// headless CI environments clipboard initialization may fail; callers should
/// treat errors as non-fatal (the CLI prints a warning on failure).
pub fn copy_to_clipboard(s: &str) -> Result<(), ClipboardError> {
    let mut ctx = arboard::Clipboard::new().map_err(|e| {
        warn!("clipboard unavailable: {}", e);
        ClipboardError::Unavailable(e.to_string())
    })?;
    ctx.set_text(s.to_owned()).map_err(|e| {
        warn!("clipboard write failed: {}", e);
        ClipboardError::Write(e.to_string())
    })?;
    debug!(len = s.len(), "copied link to clipboard");
    Ok(())
}
