use thiserror::Error;

use crate::core_types::Operand;
use crate::multiply::Variant;

/// Raised by the timing harness. A mismatch is a defect in the variant,
/// so callers stop the run instead of retrying.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error(
        "{variant} returned {actual} for {a} * {b}, expected {expected} (iteration {iteration})"
    )]
    Mismatch {
        variant: Variant,
        a: Operand,
        b: Operand,
        expected: Operand,
        actual: Operand,
        iteration: u32,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}
