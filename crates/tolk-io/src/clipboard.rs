use arboard::Clipboard;

/// Replace the system clipboard contents with `text`
pub fn copy_to_clipboard(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
