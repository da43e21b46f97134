pub mod provider;
pub mod spec;

pub use provider::SchemaProvider;
pub use spec::{Backend, ColumnSchema, ModelCatalog, ModelSpec, TableSchema, ValueType};
