/// Configuration for source generation
#[derive(Debug, Clone)]
pub struct Config {
    /// Module the generated code imports `Scanner` from
    pub support_path: syn::Path,

    /// Module the generated code imports record types from
    pub records_path: syn::Path,

    /// Whether to pipe the output through `rustfmt`
    pub rustfmt: bool,

    /// Edition passed to `rustfmt`
    pub edition: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            support_path: syn::parse_quote!(super::support),
            records_path: syn::parse_quote!(super),
            rustfmt: true,
            edition: "2021".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module path of the support code
    pub fn support_path(mut self, path: syn::Path) -> Self {
        self.support_path = path;
        self
    }

    /// Set the module path of the record types
    pub fn records_path(mut self, path: syn::Path) -> Self {
        self.records_path = path;
        self
    }

    /// Enable or disable `rustfmt`
    pub fn rustfmt(mut self, rustfmt: bool) -> Self {
        self.rustfmt = rustfmt;
        self
    }

    pub fn edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }
}
