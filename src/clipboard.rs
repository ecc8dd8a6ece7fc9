//! Clipboard access
//!
//! The platform clipboard sits behind [`ClipboardSink`] so the copy flow can
//! be exercised without a display server. [`SystemClipboard`] writes through
//! `arboard`; [`MemoryClipboard`] keeps the text in memory.

use crate::ansi::AnsiEncoder;
use crate::error::{Error, Result};
use crate::models::Document;
use crate::state::{CopyEvent, CopyStatusStore};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Destination for copied text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`
///
/// The handle is opened on first use and kept for the life of the value,
/// since on X11 the copied text is only served while a handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| Error::Clipboard {
                reason: e.to_string(),
            })?;
            self.handle = Some(clipboard);
        }
        self.handle.as_mut().ok_or_else(|| Error::Clipboard {
            reason: "clipboard unavailable".to_string(),
        })
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let result = self
            .handle()?
            .set_text(text.to_owned())
            .map_err(|e| Error::Clipboard {
                reason: e.to_string(),
            });
        if result.is_err() {
            // Reopen on the next attempt
            self.handle = None;
        }
        result
    }
}

/// In-memory clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    reject_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write with `reason`
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            contents: None,
            reject_with: Some(reason.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if let Some(reason) = &self.reject_with {
            return Err(Error::Clipboard {
                reason: reason.clone(),
            });
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Encode `document`, write it to `sink`, and record the outcome in `status`
///
/// Returns the encoded text on success. A clipboard failure is recorded in
/// `status` and also returned.
pub fn copy_document<C: ClipboardSink + ?Sized>(
    document: &Document,
    encoder: &AnsiEncoder,
    sink: &mut C,
    status: &mut CopyStatusStore,
    now: Instant,
) -> Result<String> {
    let encoded = encoder.encode_document(document);
    debug!("Encoded {} characters for the clipboard", encoded.chars().count());

    match sink.set_text(&encoded) {
        Ok(()) => {
            info!("Copied formatted text to clipboard");
            status.dispatch(CopyEvent::Succeeded, now);
            Ok(encoded)
        }
        Err(e) => {
            warn!("Failed to copy formatted text: {}", e);
            status.dispatch(CopyEvent::Failed(e.to_string()), now);
            Err(e)
        }
    }
}
