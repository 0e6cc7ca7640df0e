use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

use crate::audio::CaptureSpec;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}

/// Microphone capture parameters
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    pub duration_secs: f64,
    pub bit_depth: u16,
    pub sample_rate: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            duration_secs: 6.0,
            bit_depth: 8,
            sample_rate: 8000,
        }
    }
}

impl CaptureConfig {
    pub fn spec(&self) -> CaptureSpec {
        CaptureSpec {
            duration: Duration::from_secs_f64(self.duration_secs),
            bit_depth: self.bit_depth,
            sample_rate: self.sample_rate,
        }
    }
}

/// State machine timer cadences
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Delay before Listening hands over to SendAudio
    pub listen_delay_ms: u64,
    /// Recurring SendAudio re-entry cadence while draining
    pub drain_tick_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            listen_delay_ms: 1000,
            drain_tick_ms: 100,
        }
    }
}

/// Transport parameters for the demo binary
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    pub max_frame_length: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_frame_length: 64,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
