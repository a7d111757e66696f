use pretty_assertions::assert_eq;
use tests::MAPPERS_SRC;

/// Operation names registered by the `const SQL` table inside `<mapper>::new`.
fn registry(src: &str, mapper: &str) -> Vec<String> {
    let file = syn::parse_file(src).unwrap();

    let new = file
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(item) => Some(item),
            _ => None,
        })
        .filter(|item| matches!(&*item.self_ty, syn::Type::Path(path) if path.path.is_ident(mapper)))
        .flat_map(|item| &item.items)
        .find_map(|item| match item {
            syn::ImplItem::Fn(f) if f.sig.ident == "new" => Some(f),
            _ => None,
        })
        .unwrap();

    let sql = new
        .block
        .stmts
        .iter()
        .find_map(|stmt| match stmt {
            syn::Stmt::Item(syn::Item::Const(item)) if item.ident == "SQL" => Some(&*item.expr),
            _ => None,
        })
        .unwrap();

    let syn::Expr::Reference(sql) = sql else {
        panic!("registry is not a slice reference: {sql:?}");
    };
    let syn::Expr::Array(entries) = &*sql.expr else {
        panic!("registry is not an array: {sql:?}");
    };

    entries
        .elems
        .iter()
        .map(|entry| match entry {
            syn::Expr::Tuple(entry) => match &entry.elems[0] {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(name),
                    ..
                }) => name.value(),
                other => panic!("unexpected registry key: {other:?}"),
            },
            other => panic!("unexpected registry entry: {other:?}"),
        })
        .collect()
}

#[test]
fn generated_source_has_header() {
    assert!(MAPPERS_SRC.starts_with("// Code generated by tablestruct. DO NOT EDIT.\n"));
}

#[test]
fn mappers_follow_description_order() {
    let person = MAPPERS_SRC.find("pub struct PersonMapper").unwrap();
    let t = MAPPERS_SRC.find("pub struct TMapper").unwrap();
    let log_line = MAPPERS_SRC.find("pub struct LogLineMapper").unwrap();

    assert!(person < t);
    assert!(t < log_line);
}

#[test]
fn keyless_mapper_has_no_keyed_statements() {
    assert_eq!(
        registry(MAPPERS_SRC, "PersonMapper"),
        ["Get", "Update", "Insert", "Delete", "All"]
    );
    assert_eq!(
        registry(MAPPERS_SRC, "TMapper"),
        ["Get", "Update", "Insert", "Delete", "All"]
    );
    assert_eq!(registry(MAPPERS_SRC, "LogLineMapper"), ["Insert", "All"]);
}
