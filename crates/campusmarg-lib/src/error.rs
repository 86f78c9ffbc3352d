use thiserror::Error;

/// Convenient result alias for the CampusMarg library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node id is absent from the current graph snapshot.
    #[error("unknown node id: {id}{}", format_suggestions(.suggestions))]
    NodeNotFound {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route connects the two nodes under the requested mode.
    #[error("no route found between {origin} and {destination}")]
    NoPathFound { origin: String, destination: String },

    /// Raised when a multi-floor route is requested but the graph has no stairs or lifts.
    #[error("no stair or lift exists in the graph")]
    NoTransitionAvailable,

    /// Raised when a snapshot fails validation; the previous snapshot is kept.
    #[error("invalid graph state: {message}")]
    InvalidGraphState { message: String },

    /// Unexpected failure during route computation.
    #[error("internal routing error: {message}")]
    Internal { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether repeating the same query against the same snapshot may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Internal { .. })
    }

    pub(crate) fn invalid_graph(message: impl Into<String>) -> Self {
        Error::InvalidGraphState {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
