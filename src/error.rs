//! Error types shared by the grid, the priority queue and the search.

use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathingError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),

    #[error("search endpoint {0} is an obstacle")]
    ObstacleEndpoint(Point),

    #[error("priority queue is empty")]
    Empty,

    #[error("key is not present in the priority queue")]
    NotFound,

    #[error("key is already present in the priority queue")]
    DuplicateKey,
}

pub type Result<T> = std::result::Result<T, PathingError>;
