mod accessor;
pub(crate) use accessor::Accessor;
