use std::path::Path;

use anyhow::Context;

/// Read the complete file at `path` into cleaned text.
///
/// Decoding is permissive: byte sequences that are not valid UTF-8 are replaced with U+FFFD
/// rather than failing the run, and every literal NUL character is stripped before the text is
/// handed to the parser. Only the open or read itself can fail, and that failure is fatal.
pub(crate) fn load(path: &Path) -> Result<String, anyhow::Error> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.to_string_lossy()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.replace('\0', ""))
}
