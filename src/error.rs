//! Error types for link assembly and clipboard export.

use thiserror::Error;

/// Why a link could not be assembled.
///
/// The `Display` text is the message shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("Product and Entity are required fields.")]
    MissingRequiredField,
    #[error("All campaign fields must be filled if any are filled.")]
    IncompleteCampaignFields,
    #[error("Campaign Tag must start with 'LK-'.")]
    InvalidCampaignTagPrefix,
}

/// Clipboard export failures. Never fatal to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard init: {0}")]
    Unavailable(String),
    #[error("clipboard set: {0}")]
    Write(String),
    #[error("no link has been generated yet")]
    NothingToCopy,
}
