//! Clipboard access for cut/copy/paste.

use crate::CoreResult;

/// Text clipboard. The front end backs it with the system clipboard.
pub trait Clipboard {
    fn get_text(&mut self) -> CoreResult<Option<String>>;
    fn set_text(&mut self, text: String) -> CoreResult<()>;
}

/// In-process clipboard, used when no system clipboard is reachable.
#[derive(Debug, Clone, Default)]
pub struct LocalClipboard {
    content: Option<String>,
}

impl LocalClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for LocalClipboard {
    fn get_text(&mut self) -> CoreResult<Option<String>> {
        Ok(self.content.clone())
    }

    fn set_text(&mut self, text: String) -> CoreResult<()> {
        self.content = Some(text);
        Ok(())
    }
}
