pub mod audio;
pub mod config;
pub mod display;
pub mod error;
pub mod protocol;
pub mod state;
pub mod transport;

pub use audio::{
    CaptureSpec, FrameChunker, Microphone, RecordingOutcome, RecordingSession, SampleSource,
    WavMicrophone,
};
pub use config::Config;
pub use display::{ConsoleDisplay, Display};
pub use error::{ReadError, RecordingError};
pub use protocol::{FrameTag, OutboundFrame};
pub use state::{AudioStreamMachine, CycleOutcome, State};
pub use transport::{LogTransport, Transport};
