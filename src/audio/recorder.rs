use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::mic::Microphone;
use super::session::RecordingSession;
use crate::error::RecordingError;

/// Result of one capture: the filled session, or the capture failure
pub type RecordingOutcome = Result<RecordingSession, RecordingError>;

/// Spawn the recording task for one cycle
///
/// The task exclusively owns the session while capturing. On success it fills
/// the buffer and hands the session back over `outcome_tx`; on failure it
/// reports the error instead. Runs concurrently with the state machine's
/// timers and never blocks the scheduler.
pub fn spawn_recording(
    mic: Arc<dyn Microphone>,
    mut session: RecordingSession,
    outcome_tx: mpsc::Sender<RecordingOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let spec = session.spec();
        info!(
            "Recording task started: {:.1}s at {}Hz/{}-bit",
            spec.duration.as_secs_f64(),
            spec.sample_rate,
            spec.bit_depth
        );

        let outcome = match mic
            .record(spec.duration, spec.bit_depth, spec.sample_rate)
            .await
        {
            Ok(samples) => {
                session.fill(samples);
                Ok(session)
            }
            Err(e) => {
                error!("Recording task failed: {}", e);
                Err(e)
            }
        };

        // Receiver may be gone if the cycle was abandoned
        let _ = outcome_tx.send(outcome).await;
    })
}
