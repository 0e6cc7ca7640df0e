// Tests for the WAV-file-backed microphone used in offline runs.

use anyhow::Result;
use std::time::Duration;
use tempfile::TempDir;
use wearlink::audio::{Microphone, WavMicrophone};

fn write_wav(dir: &TempDir, name: &str, sample_rate: u32, samples: &[i16]) -> Result<String> {
    let path = dir.path().join(name);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec)?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(path.to_string_lossy().into_owned())
}

#[tokio::test]
async fn capture_requantizes_to_unsigned_8_bit() -> Result<()> {
    let dir = TempDir::new()?;
    let samples: Vec<i16> = vec![0, i16::MAX, i16::MIN, 256];
    let path = write_wav(&dir, "tone.wav", 8000, &samples)?;

    let mic = WavMicrophone::new(&path);
    let captured = mic.record(Duration::from_secs(1), 8, 8000).await?;

    assert_eq!(captured, vec![128, 255, 0, 129]);
    Ok(())
}

#[tokio::test]
async fn capture_is_clamped_to_requested_duration() -> Result<()> {
    let dir = TempDir::new()?;
    let samples = vec![100i16; 8000]; // a full second of audio
    let path = write_wav(&dir, "long.wav", 8000, &samples)?;

    let mic = WavMicrophone::new(&path);
    let captured = mic.record(Duration::from_millis(250), 8, 8000).await?;

    assert_eq!(captured.len(), 2000);
    Ok(())
}

#[tokio::test]
async fn higher_rate_files_are_decimated() -> Result<()> {
    let dir = TempDir::new()?;
    let samples: Vec<i16> = (0..160).map(|i| ((i % 100) * 256) as i16).collect();
    let path = write_wav(&dir, "hires.wav", 16000, &samples)?;

    let mic = WavMicrophone::new(&path);
    let captured = mic.record(Duration::from_secs(1), 8, 8000).await?;

    // every other source sample survives
    assert_eq!(captured.len(), 80);
    assert_eq!(&captured[..4], &[128, 130, 132, 134]);
    Ok(())
}

#[tokio::test]
async fn missing_file_surfaces_a_recording_error() {
    let mic = WavMicrophone::new("/nonexistent/capture.wav");
    let err = mic
        .record(Duration::from_secs(1), 8, 8000)
        .await
        .expect_err("open should fail");
    assert!(err.description.contains("failed to open"));
}

#[tokio::test]
async fn unsupported_bit_depth_is_rejected() {
    let mic = WavMicrophone::new("/nonexistent/capture.wav");
    let err = mic
        .record(Duration::from_secs(1), 16, 8000)
        .await
        .expect_err("bit depth should be rejected");
    assert!(err.description.contains("unsupported bit depth"));
}
