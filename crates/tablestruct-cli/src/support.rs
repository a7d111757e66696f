use crate::io;

use anyhow::{Context, Result};
use std::path::Path;
use tablestruct_codegen::Config;

/// Writes the support module generated accessors import `Scanner` from.
pub fn exec(output: Option<&Path>, config: &Config) -> Result<()> {
    let src = tablestruct_codegen::support(config).context("failed to render support module")?;
    io::write_output(output, &src)
}
