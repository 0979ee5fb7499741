// ABOUTME: Error types for localization operations
// ABOUTME: Defines specific error types for message catalog loading and parsing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
