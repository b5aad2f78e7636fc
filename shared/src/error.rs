use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("could not convert string to float: {input:?}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Computation(#[from] ComputationError),

    #[error("failed to read {name}: {reason}")]
    Read { name: String, reason: String },
}

impl CalcError {
    pub fn read(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Read {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputationError {
    /// A finite input whose result no longer fits in an `f64`.
    #[error("numerical result out of range for input {0}")]
    Overflow(f64),
}

#[derive(Debug, Error)]
pub enum ChartItemError {
    #[error("invalid chart item json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chart document for {target_id:?} has no data")]
    MissingData { target_id: String },
}
