use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::audio::{
    spawn_recording, CaptureSpec, FrameChunker, Microphone, RecordingOutcome, RecordingSession,
};
use crate::config::TimingConfig;
use crate::display::{prompt_for_elapsed, Display, ERROR_PROMPT, LISTENING_PROMPT};
use crate::protocol::{FrameTag, OutboundFrame};
use crate::transport::Transport;

/// States of the streaming control path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Capturing an utterance
    Listening,
    /// Draining the capture into `dat:` frames
    SendAudio,
    /// Streaming done; the surrounding flow takes over
    WaitForResponse,
    /// Upstream image-capture state. Never entered here, only observed as
    /// the state a cycle was driven from.
    SendImage,
}

/// How a cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Audio fully streamed, `aen:` sent, peer reply pending
    AwaitingResponse,
    /// Capture or drain failed; error shown on the display, no retry
    Aborted,
}

/// Whether a state is being entered for the first time or re-driven by its
/// own recurring timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Fresh,
    Tick,
}

/// Drives one Listening → SendAudio → WaitForResponse cycle
///
/// The machine runs as a single task; the recording task runs concurrently
/// and hands its session back over a channel. Timers are one-shot tasks that
/// post the target state back to the machine, so every transition funnels
/// through the same event loop.
pub struct AudioStreamMachine {
    capture: CaptureSpec,
    listen_delay: Duration,
    drain_tick: Duration,

    mic: Arc<dyn Microphone>,
    transport: Arc<dyn Transport>,
    display: Arc<dyn Display>,

    state: State,
    previous_state: State,
    entered_at: Instant,
    session: Option<RecordingSession>,
}

impl AudioStreamMachine {
    pub fn new(
        capture: CaptureSpec,
        timing: &TimingConfig,
        mic: Arc<dyn Microphone>,
        transport: Arc<dyn Transport>,
        display: Arc<dyn Display>,
    ) -> Self {
        Self {
            capture,
            listen_delay: Duration::from_millis(timing.listen_delay_ms),
            drain_tick: Duration::from_millis(timing.drain_tick_ms),
            mic,
            transport,
            display,
            state: State::WaitForResponse,
            previous_state: State::WaitForResponse,
            entered_at: Instant::now(),
            session: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run one full cycle, entering Listening from `upstream`
    ///
    /// `upstream` is the state the surrounding flow occupied before driving
    /// this cycle; it selects the initial frame tag (`ien:` when coming from
    /// SendImage, `ast:` otherwise). Returns once streaming has finished or
    /// the cycle aborted; recovery from an abort is the caller's job.
    pub async fn run_cycle(&mut self, upstream: State) -> Result<CycleOutcome> {
        let initial_tag = if upstream == State::SendImage {
            FrameTag::ImageAndPrompt
        } else {
            FrameTag::PromptOnly
        };

        let chunker = FrameChunker::new(self.transport.max_frame_length());

        // Per-cycle channels: stale timers from an aborted cycle hold a dead
        // sender and cannot leak into this one.
        let (timer_tx, mut timer_rx) = mpsc::channel::<State>(8);
        let (rec_tx, mut rec_rx) = mpsc::channel::<RecordingOutcome>(1);

        self.previous_state = upstream;
        self.state = State::Listening;
        self.entered_at = Instant::now();
        self.session = None;
        info!("State: {:?} -> Listening", upstream);

        self.enter_listening(Entry::Fresh, &timer_tx, rec_tx);

        loop {
            tokio::select! {
                Some(target) = timer_rx.recv() => {
                    if let Some(outcome) = self.handle_timer(target, &chunker, &timer_tx).await {
                        return Ok(outcome);
                    }
                }
                Some(outcome) = rec_rx.recv() => {
                    if let Some(outcome) = self.handle_recording(outcome, initial_tag) {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// One-shot timer: schedules a transition into `target` after `delay`
    fn after(&self, timer_tx: &mpsc::Sender<State>, delay: Duration, target: State) {
        let tx = timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Machine may have finished the cycle already
            let _ = tx.send(target).await;
        });
    }

    /// Record the transition and report which entry kind it is
    ///
    /// A timer targeting the current state is a re-entry tick: the entry
    /// timestamp and previous-state field are left untouched, so elapsed-time
    /// prompts measure from the first entry.
    fn transition(&mut self, target: State) -> Entry {
        if target == self.state {
            return Entry::Tick;
        }
        info!("State: {:?} -> {:?}", self.state, target);
        self.previous_state = self.state;
        self.state = target;
        self.entered_at = Instant::now();
        Entry::Fresh
    }

    async fn handle_timer(
        &mut self,
        target: State,
        chunker: &FrameChunker,
        timer_tx: &mpsc::Sender<State>,
    ) -> Option<CycleOutcome> {
        let entry = self.transition(target);
        match self.state {
            State::Listening => {
                // In-cycle timers never target Listening fresh; a tick only
                // re-arms the SendAudio transition, the recording task was
                // already spawned by the initial entry.
                debug_assert_eq!(entry, Entry::Tick);
                self.after(timer_tx, self.listen_delay, State::SendAudio);
                None
            }
            State::SendAudio => self.enter_send_audio(entry, chunker, timer_tx).await,
            State::WaitForResponse => Some(CycleOutcome::AwaitingResponse),
            State::SendImage => {
                warn!("Ignoring timer into upstream state {:?}", target);
                None
            }
        }
    }

    fn enter_listening(
        &mut self,
        entry: Entry,
        timer_tx: &mpsc::Sender<State>,
        rec_tx: mpsc::Sender<RecordingOutcome>,
    ) {
        if entry == Entry::Fresh {
            let session = RecordingSession::new(self.capture);
            let _task = spawn_recording(Arc::clone(&self.mic), session, rec_tx);
            self.display.clear_response();
            self.display.set_prompt(LISTENING_PROMPT);
        }
        self.after(timer_tx, self.listen_delay, State::SendAudio);
    }

    async fn enter_send_audio(
        &mut self,
        entry: Entry,
        chunker: &FrameChunker,
        timer_tx: &mpsc::Sender<State>,
    ) -> Option<CycleOutcome> {
        if entry == Entry::Fresh {
            info!("Draining captured audio");
        }
        let elapsed_ms = self.entered_at.elapsed().as_millis() as u64;
        self.display.set_prompt(prompt_for_elapsed(elapsed_ms));

        let Some(session) = &self.session else {
            // Capture still running; nothing to drain until the session is
            // handed over. Keeps the initial frame ahead of any dat: frame.
            self.after(timer_tx, self.drain_tick, State::SendAudio);
            return None;
        };

        match chunker.next_frame(session).await {
            Ok(Some(frame)) => {
                self.send(&frame);
                self.after(timer_tx, self.drain_tick, State::SendAudio);
                None
            }
            Ok(None) => {
                self.send(&OutboundFrame::audio_end());
                self.session = None;
                self.transition(State::WaitForResponse);
                Some(CycleOutcome::AwaitingResponse)
            }
            Err(e) => Some(self.abort(&e.description)),
        }
    }

    fn handle_recording(
        &mut self,
        outcome: RecordingOutcome,
        initial_tag: FrameTag,
    ) -> Option<CycleOutcome> {
        match outcome {
            Ok(session) => {
                // Sent exactly once per cycle, before any dat:/aen: frame
                self.send(&OutboundFrame::initial(initial_tag));
                self.session = Some(session);
                None
            }
            Err(e) => Some(self.abort(&e.description)),
        }
    }

    fn send(&self, frame: &OutboundFrame) {
        let bytes = frame.encode();
        info!("Sending {:?} frame ({} bytes)", frame.tag, bytes.len());
        self.transport.send(&bytes);
    }

    /// Capture or drain failed: show the error and end the cycle
    fn abort(&mut self, description: &str) -> CycleOutcome {
        warn!("Cycle aborted: {}", description);
        self.display.clear_response();
        self.display.set_prompt_with_detail(ERROR_PROMPT, description);
        self.session = None;
        CycleOutcome::Aborted
    }
}
