use async_trait::async_trait;
use hound::WavReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::error::RecordingError;

/// Microphone capture driver
///
/// Implementations capture for the requested duration and return the raw
/// sample bytes. The actual sampling hardware lives behind this trait; the
/// control path only sees the finished buffer.
#[async_trait]
pub trait Microphone: Send + Sync {
    /// Capture `duration` of audio at the given format
    async fn record(
        &self,
        duration: Duration,
        bit_depth: u16,
        sample_rate: u32,
    ) -> Result<Vec<u8>, RecordingError>;
}

/// WAV-file-backed microphone for offline runs and tests
///
/// Decimates the file down to the requested sample rate and requantizes to
/// 8-bit unsigned PCM, then serves at most `duration` worth of samples.
pub struct WavMicrophone {
    path: PathBuf,
}

impl WavMicrophone {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Microphone for WavMicrophone {
    async fn record(
        &self,
        duration: Duration,
        bit_depth: u16,
        sample_rate: u32,
    ) -> Result<Vec<u8>, RecordingError> {
        if bit_depth != 8 {
            return Err(RecordingError::new(format!(
                "unsupported bit depth: {bit_depth}"
            )));
        }

        let reader = WavReader::open(&self.path)
            .map_err(|e| RecordingError::new(format!("failed to open {:?}: {e}", self.path)))?;

        let spec = reader.spec();
        let samples: Vec<i16> = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RecordingError::new(format!("failed to read samples: {e}")))?;

        // Decimate to the requested rate, then requantize i16 -> u8
        let step = (spec.sample_rate / sample_rate).max(1) as usize;
        let max_samples = (duration.as_secs_f64() * sample_rate as f64) as usize;
        let captured: Vec<u8> = samples
            .iter()
            .step_by(step * spec.channels as usize)
            .take(max_samples)
            .map(|&s| ((s as i32 >> 8) + 128) as u8)
            .collect();

        info!(
            "WAV capture complete: {} bytes from {:?} ({}Hz -> {}Hz)",
            captured.len(),
            self.path,
            spec.sample_rate,
            sample_rate
        );

        Ok(captured)
    }
}
