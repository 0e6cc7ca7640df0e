pub mod chunker;
pub mod mic;
pub mod recorder;
pub mod session;

pub use chunker::FrameChunker;
pub use mic::{Microphone, WavMicrophone};
pub use recorder::{spawn_recording, RecordingOutcome};
pub use session::{CaptureSpec, RecordingSession, SampleSource};
