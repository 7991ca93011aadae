use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("raster shape {width}x{height} does not match {cells} cells")]
    Shape {
        width:  usize,
        height: usize,
        cells:  usize,
    },

    #[error("raster row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row:      usize,
        got:      usize,
        expected: usize,
    },
}

pub type ObserveResult<T> = Result<T, ObserveError>;
