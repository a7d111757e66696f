use crate::{Error, Result};

use heck::ToSnakeCase;
use tablestruct_core::{ColumnMap, MappingSet, TableMap};

/// Options for deriving a mapping from a record declaration
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Table name; defaults to the snake-cased record name
    pub table: Option<String>,

    /// Record field holding the primary key
    pub pk: String,

    /// Whether the database generates the primary key
    pub auto_pk: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            table: None,
            pk: "id".to_string(),
            auto_pk: false,
        }
    }
}

impl DescribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the table name
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the primary key field
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.pk = pk.into();
        self
    }

    pub fn auto_pk(mut self, auto_pk: bool) -> Self {
        self.auto_pk = auto_pk;
        self
    }
}

/// Derives a mapping description from the declaration of `record` in the
/// Rust source `src`.
///
/// Every named, non-private field becomes a column named after the field.
/// Private fields are skipped since generated accessors live in another
/// module and cannot reach them.
pub fn describe(src: &str, record: &str, options: &DescribeOptions) -> Result<MappingSet> {
    let file = syn::parse_file(src).map_err(Error::Source)?;

    let item = find_struct(&file.items, record)?
        .ok_or_else(|| Error::RecordNotFound(record.to_string()))?;

    let syn::Fields::Named(fields) = &item.fields else {
        return Err(Error::NotAStruct(record.to_string()));
    };

    let table = options
        .table
        .clone()
        .unwrap_or_else(|| record.to_snake_case());

    let mut table_map = TableMap::new(record, table).auto_pk(options.auto_pk);

    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };

        if matches!(field.vis, syn::Visibility::Inherited) {
            log::info!("skipping private field `{record}.{ident}`");
            continue;
        }

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);
        let (ty, null) = column_type(&field.ty);

        table_map = table_map.column(ColumnMap {
            field: ident.to_string(),
            column: name.to_snake_case(),
            ty,
            null,
            pk: name == options.pk,
        });
    }

    if options.auto_pk && table_map.primary_key().is_none() {
        log::warn!(
            "`{record}` has no field named `{}`; auto_pk is set without a primary key",
            options.pk
        );
    }

    Ok(MappingSet::new(vec![table_map]))
}

/// Searches `items` and inline modules for `struct <record>`.
fn find_struct<'a>(items: &'a [syn::Item], record: &str) -> Result<Option<&'a syn::ItemStruct>> {
    for item in items {
        match item {
            syn::Item::Struct(item) if item.ident == record => return Ok(Some(item)),
            syn::Item::Enum(item) if item.ident == record => {
                return Err(Error::NotAStruct(record.to_string()))
            }
            syn::Item::Union(item) if item.ident == record => {
                return Err(Error::NotAStruct(record.to_string()))
            }
            syn::Item::Type(item) if item.ident == record => {
                return Err(Error::NotAStruct(record.to_string()))
            }
            syn::Item::Mod(item) => {
                if let Some((_, items)) = &item.content {
                    if let Some(found) = find_struct(items, record)? {
                        return Ok(Some(found));
                    }
                }
            }
            _ => {}
        }
    }

    Ok(None)
}

/// Informational column type and nullability of a field type.
fn column_type(ty: &syn::Type) -> (String, bool) {
    if let Some(inner) = generic_arg(ty, "Option") {
        let (ty, _) = column_type(inner);
        return (ty, true);
    }

    if let Some(inner) = generic_arg(ty, "Vec") {
        if last_segment(inner).is_some_and(|segment| segment.ident == "u8") {
            return ("bytea".to_string(), false);
        }
    }

    let ty = match ty {
        syn::Type::Reference(reference) => return column_type(&reference.elem),
        _ => last_segment(ty).map(|segment| segment.ident.to_string()),
    };

    let hint = match ty.as_deref() {
        Some("bool") => "boolean",
        Some("i8" | "i16") => "smallint",
        Some("i32") => "integer",
        Some("i64") => "bigint",
        Some("f32") => "real",
        Some("f64") => "double precision",
        Some("String" | "str") => "text",
        Some("SystemTime" | "NaiveDateTime") => "timestamp",
        Some("DateTime") => "timestamptz",
        Some("NaiveDate") => "date",
        Some("Uuid") => "uuid",
        _ => "",
    };

    (hint.to_string(), false)
}

fn last_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None,
    }
}

/// The single type argument of `ty` if it is `<wrapper><T>`.
fn generic_arg<'a>(ty: &'a syn::Type, wrapper: &str) -> Option<&'a syn::Type> {
    let segment = last_segment(ty)?;

    if segment.ident != wrapper {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first() {
        Some(syn::GenericArgument::Type(ty)) if args.args.len() == 1 => Some(ty),
        _ => None,
    }
}
