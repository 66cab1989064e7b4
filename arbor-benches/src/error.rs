//! Benchmark setup error type.

use arbor_core::MstError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
