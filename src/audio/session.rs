use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::ReadError;

/// Capture parameters for one recording cycle
#[derive(Debug, Clone, Copy)]
pub struct CaptureSpec {
    /// Requested capture duration
    pub duration: Duration,
    /// Bits per sample (the device records 8-bit PCM)
    pub bit_depth: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Default for CaptureSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f64(6.0),
            bit_depth: 8,
            sample_rate: 8000,
        }
    }
}

/// Source of captured audio samples, drained chunk by chunk
///
/// `Ok(None)` signals that the stream is exhausted; the chunker treats it as
/// a terminal signal rather than retrying.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Read up to `n_samples` samples, or `None` once drained
    async fn read(&self, n_samples: usize) -> Result<Option<Vec<u8>>, ReadError>;
}

/// One utterance's worth of captured audio
///
/// The buffer is written once by the recording task, which owns the session
/// exclusively until capture completes. Afterwards the session is handed back
/// to the state machine and drained through an index cursor; concurrent reads
/// serialize on the cursor and consume consecutive ranges in issue order.
pub struct RecordingSession {
    spec: CaptureSpec,
    buffer: Vec<u8>,
    cursor: Mutex<usize>,
}

impl RecordingSession {
    pub fn new(spec: CaptureSpec) -> Self {
        Self {
            spec,
            buffer: Vec::new(),
            cursor: Mutex::new(0),
        }
    }

    pub fn spec(&self) -> CaptureSpec {
        self.spec
    }

    /// Store the captured samples. Called once by the recording task.
    pub fn fill(&mut self, samples: Vec<u8>) {
        info!("Recording session filled: {} bytes captured", samples.len());
        self.buffer = samples;
    }

    /// Bytes not yet drained by the chunker
    pub async fn remaining(&self) -> usize {
        let cursor = self.cursor.lock().await;
        self.buffer.len() - *cursor
    }
}

#[async_trait]
impl SampleSource for RecordingSession {
    async fn read(&self, n_samples: usize) -> Result<Option<Vec<u8>>, ReadError> {
        // 8-bit capture: one sample is one byte
        let mut cursor = self.cursor.lock().await;
        let remaining = self.buffer.len() - *cursor;
        if remaining == 0 || n_samples == 0 {
            return Ok(None);
        }

        let take = n_samples.min(remaining);
        let chunk = self.buffer[*cursor..*cursor + take].to_vec();
        *cursor += take;
        Ok(Some(chunk))
    }
}
