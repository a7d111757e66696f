
mod isolation;
mod pg_test;

// Re-export for use in macros - needs to be public for macro expansion
pub use pg_test::PgTest;

pub use db::TestDb;


/// The support module, generated by the build script.
pub mod support {
    include!(concat!(env!("OUT_DIR"), "/support.rs"));
}

/// Accessors for the fixture description, generated by the build script.
pub mod mappers {
    include!(concat!(env!("OUT_DIR"), "/mappers.rs"));
}

/// Source text of the generated accessors.
pub const MAPPERS_SRC: &str = include_str!(concat!(env!("OUT_DIR"), "/mappers.rs"));
