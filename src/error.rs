use thiserror::Error;

use crate::api::ChartLifecycle;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate bar label `{label}`")]
    DuplicateLabel { label: String },

    #[error("`{operation}` is not allowed while the chart is {state:?}")]
    InvalidLifecycle {
        operation: &'static str,
        state: ChartLifecycle,
    },
}
