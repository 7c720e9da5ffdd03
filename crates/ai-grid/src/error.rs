use ai_search::SearchError;
use thiserror::Error;

use crate::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("layout is empty")]
    EmptyLayout,

    #[error("layout row {row} is {found} cells wide, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout has no start position 'P'")]
    MissingStart,

    #[error("layout has more than one start position 'P'")]
    MultipleStarts,

    #[error("illegal move {direction:?} from {position:?}")]
    IllegalMove {
        position: Position,
        direction: Direction,
    },

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, GridError>;
