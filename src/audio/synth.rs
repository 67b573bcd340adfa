use crate::error::AudioError;

/// Exponent of the parabolic envelope applied to every element buffer
pub const ENVELOPE_EXPONENT: f32 = 0.1;

/// Generate a sine tone as raw f32 samples
///
/// The buffer holds `round(duration * rate)` samples of
/// `sin(2 pi * frequency * i / rate)`; phase math runs in f64.
pub fn synthesize(
    duration_seconds: f32,
    frequency_hz: f32,
    sample_rate: u32,
) -> Result<Vec<f32>, AudioError> {
    let count = sample_count(duration_seconds, sample_rate)?;
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(AudioError::InvalidTiming {
            name: "tone_frequency_hz",
            value: frequency_hz as f64,
        });
    }

    let step = std::f64::consts::TAU * frequency_hz as f64 / sample_rate as f64;
    Ok((0..count).map(|i| (step * i as f64).sin() as f32).collect())
}

/// Generate a silent buffer of `round(duration * rate)` samples
pub fn silence(duration_seconds: f32, sample_rate: u32) -> Result<Vec<f32>, AudioError> {
    let count = sample_count(duration_seconds, sample_rate)?;
    Ok(vec![0.0; count])
}

fn sample_count(duration_seconds: f32, sample_rate: u32) -> Result<usize, AudioError> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidTiming {
            name: "sample_rate",
            value: 0.0,
        });
    }
    if !duration_seconds.is_finite() || duration_seconds < 0.0 {
        return Err(AudioError::InvalidTiming {
            name: "duration_seconds",
            value: duration_seconds as f64,
        });
    }
    Ok((duration_seconds as f64 * sample_rate as f64).round() as usize)
}

/// Apply the fade window to a buffer, consuming and returning it
///
/// Sample `i` is scaled by `(1 - x^2)^exponent` with `x = 2 * i / len - 1`,
/// so the window opens at exactly zero and never quite closes. An empty
/// buffer passes through untouched.
pub fn shape(mut samples: Vec<f32>, exponent: f32) -> Vec<f32> {
    let len = samples.len() as f64;
    for (i, sample) in samples.iter_mut().enumerate() {
        let x = 2.0 * (i as f64 / len) - 1.0;
        *sample *= (1.0 - x * x).powf(exponent as f64) as f32;
    }
    samples
}
