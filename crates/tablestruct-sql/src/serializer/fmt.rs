use super::Formatter;

use tablestruct_core::InsertValue;

macro_rules! fmt {
    ($f:expr, $( $fragments:tt )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>);
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToSql for &String {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToSql for String {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self);
    }
}

impl ToSql for InsertValue {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail
        let _ = write!(f.dst, "{self}");
    }
}

/// A `$N` statement argument.
pub(super) struct Placeholder(pub(super) usize);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        InsertValue::Placeholder(self.0).to_sql(f);
    }
}
