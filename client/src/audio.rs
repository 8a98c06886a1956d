//! Square-wave audio cues.
//!
//! The three clips are synthesized up front as signed 16-bit mono PCM and
//! mixed through rodio when a cue fires. Sound is optional: if no output
//! device can be opened the game keeps running silent.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Source};
use tracing::warn;

pub const SAMPLE_RATE: u32 = 44100;

// Keeps the square waves at a comfortable volume
const AMPLITUDE: i16 = (0.025 * i16::MAX as f64) as i16;

/// One synthesized clip
pub struct AudioClip {
    samples: Vec<i16>,
}

impl AudioClip {
    /// Square wave at `freq` Hz lasting `duration` seconds
    pub fn square_wave(freq: u32, duration: f32) -> Self {
        let num_samples = (duration * SAMPLE_RATE as f32) as usize;
        let mut samples = Vec::with_capacity(num_samples);
        for i in 0..num_samples {
            let t = i as f64 / SAMPLE_RATE as f64;
            let level = if (std::f64::consts::TAU * freq as f64 * t).sin() >= 0.0 {
                AMPLITUDE
            } else {
                -AMPLITUDE
            };
            samples.push(level);
        }
        Self { samples }
    }

    fn samples(&self) -> &[i16] {
        &self.samples
    }
}

/// The game's audio cues
#[derive(Debug, Clone, Copy)]
pub enum Cue {
    WallBounce,
    PaddleHit,
    PointScored,
}

/// Output device plus the clip for each cue
pub struct AudioOutput {
    // The stream must outlive every playing source
    _stream: OutputStream,
    handle: OutputStreamHandle,
    wall_bounce: AudioClip,
    paddle_hit: AudioClip,
    point_scored: AudioClip,
}

impl AudioOutput {
    /// Open the default output device
    ///
    /// Returns `None` when no device is available; the caller treats cues
    /// as no-ops in that case.
    pub fn open() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
                wall_bounce: AudioClip::square_wave(240, 0.020),
                paddle_hit: AudioClip::square_wave(480, 0.035),
                point_scored: AudioClip::square_wave(240, 0.510),
            }),
            Err(err) => {
                warn!("no audio output, continuing without sound: {err}");
                None
            }
        }
    }

    /// Fire-and-forget playback; cues raised together mix
    pub fn play(&self, cue: Cue) {
        let clip = match cue {
            Cue::WallBounce => &self.wall_bounce,
            Cue::PaddleHit => &self.paddle_hit,
            Cue::PointScored => &self.point_scored,
        };
        let source = SamplesBuffer::new(1, SAMPLE_RATE, clip.samples().to_vec());
        if let Err(err) = self.handle.play_raw(source.convert_samples()) {
            warn!("play audio cue: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_sample_count() {
        let clip = AudioClip::square_wave(240, 0.020);
        assert_eq!(
            clip.samples().len(),
            (0.020f32 * SAMPLE_RATE as f32) as usize
        );

        let clip = AudioClip::square_wave(240, 0.510);
        assert_eq!(
            clip.samples().len(),
            (0.510f32 * SAMPLE_RATE as f32) as usize
        );
    }

    #[test]
    fn test_square_wave_levels() {
        let clip = AudioClip::square_wave(240, 0.020);
        assert!(clip
            .samples()
            .iter()
            .all(|&s| s == AMPLITUDE || s == -AMPLITUDE));
    }

    #[test]
    fn test_square_wave_starts_high_and_alternates() {
        let clip = AudioClip::square_wave(240, 0.020);
        assert_eq!(clip.samples()[0], AMPLITUDE, "sin(0) counts as high");
        assert!(
            clip.samples().iter().any(|&s| s == -AMPLITUDE),
            "the wave reaches its low half"
        );
    }

    #[test]
    fn test_square_wave_period() {
        // At 240 Hz the first half period is about 92 samples long
        let clip = AudioClip::square_wave(240, 0.020);
        assert_eq!(clip.samples()[91], AMPLITUDE);
        assert_eq!(clip.samples()[92], -AMPLITUDE);
    }
}
