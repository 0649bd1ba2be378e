// src/error.rs

/// Every way a run can fail. Nothing here is retried or downgraded;
/// the first error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Transport failure, non-2xx status, or a body that isn't valid JSON.
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// The feed document lacks an expected key, or it has the wrong type.
    #[error("Feed schema error: missing or invalid `{path}`")]
    Schema { path: String },

    /// Duplicate primary key on insert.
    #[error("Character `{id}` is already stored")]
    Constraint { id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A header or proxy the HTTP client refused.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl ScrapeError {
    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        ScrapeError::Network { url: s!(url), message: err.to_string() }
    }

    pub fn schema(path: impl Into<String>) -> Self {
        ScrapeError::Schema { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
