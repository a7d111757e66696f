use crate::{expand, Config, Error, Result};

use proc_macro2::TokenStream;
use quote::quote;

/// First line of every generated file.
pub(crate) const HEADER: &str = "// Code generated by tablestruct. DO NOT EDIT.\n";

/// Generated code for a whole mapping set.
#[derive(Debug)]
pub struct Output {
    /// Per-table output, in mapping set order
    pub sections: Vec<Section>,

    /// `use` items shared by the sections
    preamble: TokenStream,

    config: Config,
}

/// Generated code for a single table mapping
#[derive(Debug)]
pub struct Section {
    /// Record type the accessor loads and stores
    pub record: syn::Ident,

    /// Name of the accessor type
    pub mapper: syn::Ident,

    /// Declaration and methods of the accessor
    pub body: TokenStream,
}

impl Output {
    pub(crate) fn new(sections: Vec<Section>, config: &Config) -> Output {
        let records: Vec<_> = sections.iter().map(|section| &section.record).collect();
        let preamble = expand::preamble(&records, config);

        Output {
            sections,
            preamble,
            config: config.clone(),
        }
    }

    /// Every generated item as one token stream, without formatting.
    pub fn tokens(&self) -> TokenStream {
        let preamble = &self.preamble;
        let bodies = self.sections.iter().map(|section| &section.body);

        quote! {
            #preamble
            #( #bodies )*
        }
    }

    /// Assembles the output unit and canonicalizes its formatting.
    pub fn render(&self) -> Result<String> {
        render(&self.tokens(), &self.config)
    }
}

/// Checks that `tokens` form a valid file, then formats them.
pub(crate) fn render(tokens: &TokenStream, config: &Config) -> Result<String> {
    let file: syn::File = syn::parse2(tokens.clone()).map_err(Error::Render)?;
    log::debug!("rendered {} item(s)", file.items.len());

    let body = tokens.to_string();
    let body = if config.rustfmt {
        rustfmt(body, &config.edition)?
    } else {
        body
    };

    let mut src = String::with_capacity(HEADER.len() + 1 + body.len());
    src.push_str(HEADER);
    src.push('\n');
    src.push_str(&body);

    if !src.ends_with('\n') {
        src.push('\n');
    }

    Ok(src)
}

fn rustfmt(source: String, edition: &str) -> Result<String> {
    use std::io::prelude::*;
    use std::process::{Command, Stdio};

    let mut child = Command::new("rustfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .args(["--emit", "stdout", "--edition", edition])
        .spawn()
        .map_err(|err| Error::Format(format!("failed to run rustfmt: {err}")))?;

    let mut child_stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Format("rustfmt stdin unavailable".to_string()))?;

    // Feed stdin from a separate thread so a full stdout pipe cannot block
    // the write
    let th = std::thread::spawn(move || child_stdin.write_all(source.as_bytes()));

    let output = child
        .wait_with_output()
        .map_err(|err| Error::Format(format!("failed to wait on rustfmt: {err}")))?;

    match th.join() {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            return Err(Error::Format(format!("failed to write to rustfmt: {err}")));
        }
        Err(_) => return Err(Error::Format("thread feeding rustfmt panicked".to_string())),
    }

    match output.status.code() {
        Some(0) => {}
        Some(2) => {
            return Err(Error::Format(format!(
                "parsing errors: {}",
                String::from_utf8_lossy(&output.stderr)
            )))
        }
        Some(3) => return Err(Error::Format("rustfmt failed to format".to_string())),
        _ => {
            return Err(Error::Format(format!(
                "rustfmt exited with {}",
                output.status
            )))
        }
    }

    String::from_utf8(output.stdout)
        .map_err(|err| Error::Format(format!("rustfmt produced invalid UTF-8: {err}")))
}
