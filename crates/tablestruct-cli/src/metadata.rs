use crate::io;

use anyhow::{Context, Result};
use std::path::Path;
use tablestruct_codegen::DescribeOptions;

/// Prints the mapping description derived from the declaration of `record`.
pub fn exec(
    record: &str,
    input: Option<&Path>,
    output: Option<&Path>,
    options: &DescribeOptions,
) -> Result<()> {
    let src = io::read_input(input)?;
    let mut json = describe(&src, record, options)?;
    json.push('\n');
    io::write_output(output, &json)
}

pub fn describe(src: &str, record: &str, options: &DescribeOptions) -> Result<String> {
    let mappings = tablestruct_codegen::describe(src, record, options)
        .with_context(|| format!("failed to describe `{record}`"))?;

    Ok(mappings.to_json_pretty()?)
}
