//! Error types and result utilities for PCM format operations.
//!
//! Numeric range problems are never reported here: out-of-range samples are
//! clipped during conversion. The variants below cover the configuration
//! boundary (format names and ids), conversions that need a raw pivot, and
//! the checked buffer entry point of [`SampleMapper`](crate::SampleMapper).

use thiserror::Error;

use crate::catalog::SampleFormat;

/// Convenience type alias for results that may contain a [`PcmError`].
pub type PcmResult<T> = Result<T, PcmError>;

/// Error types that can occur while resolving or applying PCM conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PcmError {
    /// A format name did not exactly match any catalog entry.
    ///
    /// Format names frequently come from untrusted configuration, so this is
    /// reported rather than treated as fatal.
    #[error("Invalid sample format name: {0:?}")]
    InvalidFormatName(String),

    /// A numeric format id lies outside the catalog.
    #[error("Invalid sample format id: {0}")]
    InvalidFormatId(u16),

    /// Neither side of the requested pair is a raw format.
    ///
    /// The caller is expected to convert in two hops through a raw format.
    #[error("No direct conversion from {from} to {to}; convert through a raw format")]
    UnsupportedConversion {
        /// Requested source format.
        from: SampleFormat,
        /// Requested destination format.
        to: SampleFormat,
    },

    /// A buffer cannot hold the requested number of samples.
    #[error("Buffer too small for {operation}: need {required} bytes, got {actual}")]
    BufferTooSmall {
        /// Which side of the mapping was undersized.
        operation: &'static str,
        /// Bytes needed for the requested sample count.
        required: usize,
        /// Bytes actually available.
        actual: usize,
    },
}

impl PcmError {
    /// Create an invalid format name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidFormatName(name.into())
    }

    /// Create an unsupported conversion error for the given pair.
    pub const fn unsupported(from: SampleFormat, to: SampleFormat) -> Self {
        Self::UnsupportedConversion { from, to }
    }

    /// Create an undersized input buffer error.
    pub const fn input_too_small(required: usize, actual: usize) -> Self {
        Self::BufferTooSmall {
            operation: "input",
            required,
            actual,
        }
    }

    /// Create an undersized output buffer error.
    pub const fn output_too_small(required: usize, actual: usize) -> Self {
        Self::BufferTooSmall {
            operation: "output",
            required,
            actual,
        }
    }

    /// Whether the caller can still make progress without changing its input.
    ///
    /// An unsupported direct conversion is recoverable by pivoting through a
    /// raw format. Bad names, bad ids and short buffers are not.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsupportedConversion { .. })
    }
}
