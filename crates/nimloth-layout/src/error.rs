#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid layout spacing `{field}`: {value} (must be finite and non-negative)")]
    InvalidSpacing { field: &'static str, value: f64 },

    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
