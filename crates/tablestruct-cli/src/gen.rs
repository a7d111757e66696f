use crate::io;

use anyhow::{Context, Result};
use std::path::Path;
use tablestruct_codegen::Config;
use tablestruct_core::MappingSet;

/// Generates accessors for every mapping in the description at `input`.
pub fn exec(input: Option<&Path>, output: Option<&Path>, config: &Config) -> Result<()> {
    let src = io::read_input(input)?;
    let source = render(&src, config)?;
    io::write_output(output, &source)
}

/// Parses a mapping description and renders its accessors.
pub fn render(description: &str, config: &Config) -> Result<String> {
    let mappings = MappingSet::from_json(description).context("invalid mapping description")?;

    let output =
        tablestruct_codegen::generate(&mappings, config).context("failed to generate accessors")?;

    output.render().context("failed to render accessors")
}
