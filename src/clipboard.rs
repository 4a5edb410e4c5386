use anyhow::Context;

/// Destination of the "copy" action.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The desktop clipboard.
pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    pub fn new() -> anyhow::Result<SystemClipboard> {
        let clipboard = arboard::Clipboard::new().context("Cannot access the system clipboard")?;
        Ok(SystemClipboard(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.0.set_text(text).context("Failed to copy to the clipboard")
    }
}
