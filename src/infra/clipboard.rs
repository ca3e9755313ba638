use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::infra::contracts::ClipboardSink;

/// System clipboard. The handle is opened lazily so commands that never copy
/// do not touch the display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("failed to access system clipboard")?,
        };
        let clipboard = self.inner.insert(clipboard);

        clipboard
            .set_text(text)
            .context("failed to copy text to clipboard")
    }
}
