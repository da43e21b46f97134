pub mod errors;
pub mod specs;

pub use errors::{CoreError, Result};
pub use specs::{
    Backend, ColumnSchema, ModelCatalog, ModelSpec, SchemaProvider, TableSchema, ValueType,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get crate version
pub fn version() -> &'static str {
    VERSION
}
