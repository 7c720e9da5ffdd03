use thiserror::Error;

/// Errors during graph search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution: frontier exhausted after {expanded} expansions")]
    NoSolution { expanded: usize },

    #[error("expansion limit of {limit} reached before finding a goal")]
    ExpansionLimit { limit: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
