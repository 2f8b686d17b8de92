// ============================================================================
// mpf-component-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Detection error taxonomy
//
// Every fallible operation in this crate fails with a single type,
// `ComponentDetectionFailure`, which carries exactly one
// `DetectionErrorKind` plus an optional message and underlying cause.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// The closed set of failure categories a detection component can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionErrorKind {
    DetectionSuccess,
    OtherDetectionErrorType,
    DetectionNotInitialized,
    UnsupportedDataType,
    CouldNotOpenDatafile,
    CouldNotReadDatafile,
    FileWriteError,
    BadFrameSize,
    DetectionFailed,
    InvalidProperty,
    MissingProperty,
    GpuError,
    NetworkError,
    CouldNotOpenMedia,
    CouldNotReadMedia,
}

impl DetectionErrorKind {
    /// Stable upper-case name, as used in host-facing logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DetectionSuccess => "MPF_DETECTION_SUCCESS",
            Self::OtherDetectionErrorType => "MPF_OTHER_DETECTION_ERROR_TYPE",
            Self::DetectionNotInitialized => "MPF_DETECTION_NOT_INITIALIZED",
            Self::UnsupportedDataType => "MPF_UNSUPPORTED_DATA_TYPE",
            Self::CouldNotOpenDatafile => "MPF_COULD_NOT_OPEN_DATAFILE",
            Self::CouldNotReadDatafile => "MPF_COULD_NOT_READ_DATAFILE",
            Self::FileWriteError => "MPF_FILE_WRITE_ERROR",
            Self::BadFrameSize => "MPF_BAD_FRAME_SIZE",
            Self::DetectionFailed => "MPF_DETECTION_FAILED",
            Self::InvalidProperty => "MPF_INVALID_PROPERTY",
            Self::MissingProperty => "MPF_MISSING_PROPERTY",
            Self::GpuError => "MPF_GPU_ERROR",
            Self::NetworkError => "MPF_NETWORK_ERROR",
            Self::CouldNotOpenMedia => "MPF_COULD_NOT_OPEN_MEDIA",
            Self::CouldNotReadMedia => "MPF_COULD_NOT_READ_MEDIA",
        }
    }
}

impl fmt::Display for DetectionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised by a detection operation.
#[derive(Error, Debug)]
#[error("{kind}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct ComponentDetectionFailure {
    kind: DetectionErrorKind,
    message: Option<String>,
    #[source]
    source: Option<BoxedCause>,
}

impl ComponentDetectionFailure {
    /// Creates a failure carrying only an error kind.
    #[must_use]
    pub fn new(kind: DetectionErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Creates a failure with a human-readable message.
    pub fn with_message(kind: DetectionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a failure that wraps an underlying cause.
    pub fn with_source<E>(kind: DetectionErrorKind, message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind,
            message: Some(message.into()),
            source: Some(Box::new(cause)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DetectionErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // Shorthands for the kinds raised by this crate.

    pub fn missing_property(message: impl Into<String>) -> Self {
        Self::with_message(DetectionErrorKind::MissingProperty, message)
    }

    pub fn invalid_property(message: impl Into<String>) -> Self {
        Self::with_message(DetectionErrorKind::InvalidProperty, message)
    }

    pub fn unsupported_data_type(message: impl Into<String>) -> Self {
        Self::with_message(DetectionErrorKind::UnsupportedDataType, message)
    }
}

impl From<DetectionErrorKind> for ComponentDetectionFailure {
    fn from(kind: DetectionErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for detection operations
pub type DetectionResult<T> = std::result::Result<T, ComponentDetectionFailure>;
