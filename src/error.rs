use thiserror::Error;

/// Capture-level failure reported by the microphone driver.
#[derive(Debug, Clone, Error)]
#[error("recording failed: {description}")]
pub struct RecordingError {
    /// Human-readable description shown on the device display
    pub description: String,
}

impl RecordingError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Drain-level failure reported while reading captured samples.
#[derive(Debug, Clone, Error)]
#[error("audio read failed: {description}")]
pub struct ReadError {
    /// Human-readable description shown on the device display
    pub description: String,
}

impl ReadError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
