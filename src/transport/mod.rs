//! Wireless transport seam
//!
//! Frames are fire-and-forget raw bytes; link negotiation and MTU discovery
//! happen below this trait, which only reports the negotiated maximum.

use tracing::info;

/// Bluetooth/transport collaborator
pub trait Transport: Send + Sync {
    /// Send one encoded frame, fire-and-forget
    fn send(&self, frame: &[u8]);

    /// Maximum frame length the link can carry, tag included
    fn max_frame_length(&self) -> usize;
}

/// Logs outbound frames instead of driving a real link
pub struct LogTransport {
    max_frame_length: usize,
}

impl LogTransport {
    pub fn new(max_frame_length: usize) -> Self {
        Self { max_frame_length }
    }
}

impl Transport for LogTransport {
    fn send(&self, frame: &[u8]) {
        let tag = String::from_utf8_lossy(&frame[..frame.len().min(4)]).into_owned();
        info!("Frame sent: {} ({} bytes)", tag, frame.len());
    }

    fn max_frame_length(&self) -> usize {
        self.max_frame_length
    }
}
