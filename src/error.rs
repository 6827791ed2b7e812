use thiserror::Error;

/// Errors returned by the distance, correlation, and clustering routines in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Vectors that must share a length do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A dataset cell holds NaN or an infinity.
    #[error("non-finite value at row {row}, column {column}")]
    NonFinite {
        /// Row of the offending value.
        row: usize,
        /// Column of the offending value.
        column: usize,
    },

    /// A column index is past the end of the rows.
    #[error("column {column} out of range for {n_columns} columns")]
    ColumnOutOfRange {
        /// Requested column.
        column: usize,
        /// Number of columns in the dataset.
        n_columns: usize,
    },

    /// A column is constant, so its correlation with anything is undefined.
    #[error("degenerate column {column}: zero variance, correlation is undefined")]
    DegenerateColumn {
        /// The constant column.
        column: usize,
    },

    /// Metric name not recognized by a strict parse.
    #[error("unknown distance metric '{0}'")]
    UnknownMetric(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
