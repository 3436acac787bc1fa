use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid shape is not 6x6")]
    InvalidBoardShape,
    #[error("Unknown cell glyph {0:?}")]
    InvalidCell(char),
    #[error("Too many large drawing cells, {0} revealed but it only covers 6")]
    TooManyLargeCells(u8),
    #[error("Too many medium drawing cells, {0} revealed but it only covers 4")]
    TooManyMediumCells(u8),
}

pub type Result<T> = core::result::Result<T, SolverError>;
