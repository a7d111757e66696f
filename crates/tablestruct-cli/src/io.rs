use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;

/// Reads `path`, or stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .context("failed to read stdin")?;
            Ok(src)
        }
    }
}

/// Writes `src` to `path`, or stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, src: &str) -> Result<()> {
    match path {
        Some(path) => {
            log::info!("  {:>10}    {}", "writing", path.display());
            std::fs::write(path, src).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(src.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write stdout")
        }
    }
}
