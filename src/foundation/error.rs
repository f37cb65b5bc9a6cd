/// Result alias used across the crate.
pub type PageResult<T> = Result<T, PageError>;

/// Errors raised at the crate boundaries (input loading, authoring validation, output).
///
/// Rendering itself never fails: a disabled, empty or malformed module renders nothing.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    /// Authoring-time validation of a product configuration failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration or settings document could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing rendered output failed.
    #[error("render error: {0}")]
    Render(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageError {
    /// Build a [`PageError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PageError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PageError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
