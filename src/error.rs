//! Error types for numbench.
//!
//! The kernels themselves are pure arithmetic on compiled-in constants and
//! have no failure paths; errors only arise at the harness boundary
//! (configuration files, unknown kernel names, I/O). Out-of-memory during
//! bignum growth is deliberately not caught — there is no meaningful
//! recovery, so it terminates the process.

use thiserror::Error;

/// Result type alias for numbench operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Unified error type for the benchmark harness.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested kernel does not exist.
    #[error("Unknown kernel '{name}' (available: nbody, pidigits)")]
    UnknownKernel {
        /// The kernel name that was requested.
        name: String,
    },
}

impl BenchError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-kernel error.
    #[must_use]
    pub fn unknown_kernel(name: impl Into<String>) -> Self {
        Self::UnknownKernel { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = BenchError::config("timestep must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: timestep must be positive"
        );
    }

    #[test]
    fn test_unknown_kernel_display() {
        let err = BenchError::unknown_kernel("fft");
        let msg = err.to_string();
        assert!(msg.contains("fft"));
        assert!(msg.contains("nbody"));
        assert!(msg.contains("pidigits"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BenchError = io.into();
        assert!(matches!(err, BenchError::Io(_)));
    }
}
