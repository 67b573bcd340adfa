use std::path::PathBuf;
use thiserror::Error;

/// Errors from tone synthesis and the playback engine
#[derive(Debug, Error)]
pub enum AudioError {
    /// A synthesis parameter was outside its valid range
    #[error("invalid timing: {name} = {value}")]
    InvalidTiming { name: &'static str, value: f64 },

    #[error("no audio output device found")]
    NoOutputDevice,

    #[error("unsupported sample format {0:?}")]
    UnsupportedSampleFormat(cpal::SampleFormat),

    #[error("failed to query the output device: {0}")]
    DeviceConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build the output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start the output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}

/// Errors from dictionary loading and word selection
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("cannot read word list {}: {source}", .path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {} contains no usable words", .path.display())]
    EmptyDictionary { path: PathBuf },

    /// No word in the pool falls inside the requested length bounds
    #[error("no words with {min_length} to {max_length} characters available")]
    NoWordsAvailable {
        min_length: usize,
        max_length: usize,
    },

    #[error("invalid range: {min} to {max}")]
    InvalidRange { min: usize, max: usize },
}
