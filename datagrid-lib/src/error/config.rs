//! Configuration error types

/// Errors detected when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The grid needs at least one column to sort by.
    #[error("At least one column is required")]
    NoColumns,

    /// The page size option list is empty.
    #[error("At least one page size option is required")]
    NoPageSizes,

    /// A page size option is zero.
    #[error("Page size options must be greater than zero")]
    ZeroPageSize,

    /// Two columns share a key.
    #[error("Duplicate column key: {0}")]
    DuplicateColumn(String),
}
