use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("punch grid has no staff rows")]
    EmptyGrid,

    #[error("staff roster is empty")]
    EmptyRoster,

    #[error("name column {index} out of range for a sheet {width} columns wide")]
    RosterColumn { index: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, ReportError>;
