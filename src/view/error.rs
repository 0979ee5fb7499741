// ABOUTME: Error types for page rendering operations
// ABOUTME: Defines specific error types for template registration, context building and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Template registration error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Helper registration error: {0}")]
    HelperError(String),

    #[error("Location #{0} referenced by the tree is missing from the locations map")]
    UnknownLocation(i64),
}

pub type Result<T> = std::result::Result<T, ViewError>;
