//! Listen → stream → wait-for-reply sequencing
//!
//! This module provides the `AudioStreamMachine` that drives one utterance
//! cycle: spawn the recording task, stream the captured audio in
//! transport-sized frames, then hand control back to the surrounding flow.

mod machine;

pub use machine::{AudioStreamMachine, CycleOutcome, State};
