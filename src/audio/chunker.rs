use tracing::info;

use super::session::SampleSource;
use crate::error::ReadError;
use crate::protocol::{OutboundFrame, TAG_LEN};

/// Splits a recording into transport-sized `dat:` frames
///
/// The per-read budget reserves the 4-byte tag and halves what is left, so
/// two reads can be coalesced into a single frame without ever exceeding the
/// transport's maximum payload.
#[derive(Debug, Clone, Copy)]
pub struct FrameChunker {
    samples_per_read: usize,
}

impl FrameChunker {
    pub fn new(max_frame_len: usize) -> Self {
        let samples_per_read = max_frame_len.saturating_sub(TAG_LEN) / 2;
        info!(
            "Frame chunker initialized: {} samples per read (max frame {})",
            samples_per_read, max_frame_len
        );
        Self { samples_per_read }
    }

    pub fn samples_per_read(&self) -> usize {
        self.samples_per_read
    }

    /// Drain up to two chunks into the next `dat:` frame
    ///
    /// Issues both reads concurrently and joins them. An empty first read
    /// means the recording is fully drained and yields `None`; an empty
    /// second read yields a final partial frame holding only the first chunk.
    pub async fn next_frame(
        &self,
        source: &dyn SampleSource,
    ) -> Result<Option<OutboundFrame>, ReadError> {
        let (first, second) = tokio::join!(
            source.read(self.samples_per_read),
            source.read(self.samples_per_read),
        );

        let frame = match (first?, second?) {
            (None, _) => None,
            (Some(chunk1), None) => Some(OutboundFrame::data(chunk1)),
            (Some(mut chunk1), Some(chunk2)) => {
                chunk1.extend_from_slice(&chunk2);
                Some(OutboundFrame::data(chunk1))
            }
        };

        Ok(frame)
    }
}
