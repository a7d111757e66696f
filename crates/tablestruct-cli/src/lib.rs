pub mod gen;
pub mod metadata;
pub mod support;

mod io;
