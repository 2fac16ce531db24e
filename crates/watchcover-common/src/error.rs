//! Common error types used throughout watchcover.
//!
//! Coverage resolution itself is total and never fails; these errors come
//! from the layers around it: telemetry ingestion, configuration and
//! timeline file parsing.

/// Common error type for watchcover.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A telemetry event or parameter was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A sample arrived with a receipt time earlier than its predecessor.
    #[error("Out-of-order sample: received at {received}s after {previous}s")]
    OutOfOrder {
        /// Receipt time of the last accepted sample, in seconds.
        previous: f64,
        /// Receipt time of the rejected sample, in seconds.
        received: f64,
    },

    /// A numeric field was NaN or infinite.
    #[error("Non-finite value for {field}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Configuration is unusable.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new Parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
