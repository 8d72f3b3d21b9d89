use thiserror::Error;

/// Main error type for the leaderboard helpers
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML catalog errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON catalog errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A category was declared without any metric
    #[error("Category '{0}' has an empty metric path")]
    EmptyPath(String),

    /// Two categories terminate on the same metric path
    #[error("Categories '{first}' and '{second}' share the metric path [{path}]")]
    DuplicatePath {
        first: String,
        second: String,
        path: String,
    },

    /// Metric id declared twice
    #[error("Duplicate metric id: {0}")]
    DuplicateMetric(String),

    /// Category id declared twice
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Category path references a metric the catalog does not declare
    #[error("Category '{category}' references unknown metric '{metric}'")]
    UnknownMetric { category: String, metric: String },

    /// The process-wide catalog was already installed
    #[error("A catalog is already installed")]
    CatalogAlreadyInstalled,

    /// Search matched nothing
    #[error("\"{0}\" is not a recognized value")]
    NotRecognized(String),

    /// Search matched more than one candidate
    #[error("\"{search}\" is ambiguous, did you mean one of: {matches}?")]
    Ambiguous { search: String, matches: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LeaderboardError>;
