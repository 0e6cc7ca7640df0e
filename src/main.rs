use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wearlink::{AudioStreamMachine, Config, ConsoleDisplay, LogTransport, State, WavMicrophone};

/// Stream a WAV capture through the wearable audio control path
#[derive(Parser)]
struct Args {
    /// WAV file standing in for the microphone
    wav: PathBuf,

    /// Config file stem (e.g. config/wearlink resolves config/wearlink.toml)
    #[arg(long, default_value = "config/wearlink")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("wearlink v0.1.0");
    info!(
        "Capture: {:.1}s at {}Hz/{}-bit",
        cfg.capture.duration_secs, cfg.capture.sample_rate, cfg.capture.bit_depth
    );
    info!("Transport max frame length: {}", cfg.transport.max_frame_length);

    let mic = Arc::new(WavMicrophone::new(&args.wav));
    let transport = Arc::new(LogTransport::new(cfg.transport.max_frame_length));
    let display = Arc::new(ConsoleDisplay);

    let mut machine =
        AudioStreamMachine::new(cfg.capture.spec(), &cfg.timing, mic, transport, display);

    let outcome = machine.run_cycle(State::WaitForResponse).await?;
    info!("Cycle finished: {:?}", outcome);

    Ok(())
}
