//! Error types for the dashboard landing core.

/// Top-level error type for the landing core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),
}

/// Errors from the backend fetch collaborators.
///
/// None of these are fatal: every fetch failure degrades the view to a
/// fallback or empty state.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Backend returned an error for {path}: {reason}")]
    Backend { path: String, reason: String },

    #[error("Network failure reaching {path}: {reason}")]
    Network { path: String, reason: String },

    #[error("Failed to decode response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Diagnostics for descriptors that cannot drive a navigation.
///
/// A malformed descriptor is never an actionable failure; it is logged and
/// the view falls back to the in-progress instances list.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Descriptor requires user input but is missing {missing}")]
    IncompleteInstanceRef { missing: &'static str },

    #[error("Unrecognized default-view value: {0}")]
    UnrecognizedValue(String),
}

/// Result type alias for the landing core.
pub type Result<T> = std::result::Result<T, Error>;
