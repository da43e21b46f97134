pub mod core;

pub use self::core::CoreError;

/// Result alias used across the crudkit crates
pub type Result<T> = std::result::Result<T, CoreError>;
