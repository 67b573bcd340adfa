use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub audio: AudioSettings,
    #[serde(default)]
    pub training: TrainingSettings,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AudioSettings {
    pub sample_rate: u32,
    pub tone_frequency_hz: f32,
    /// Dot duration in seconds; every other duration is a multiple of it
    pub unit_seconds: f32,
    /// Output scaling applied to every generated waveform
    #[serde(default = "default_attenuation")]
    pub attenuation: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingSettings {
    pub dictionary_path: PathBuf,
    /// Words containing any of these characters are left out of the pool
    #[serde(default = "default_ignore_chars")]
    pub ignore_chars: String,
    pub word_length_min: usize,
    pub word_length_max: usize,
    pub words_min: usize,
    pub words_max: usize,
}

fn default_attenuation() -> f32 {
    0.3
}

fn default_ignore_chars() -> String {
    "-./".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            audio: AudioSettings::default(),
            training: TrainingSettings::default(),
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            tone_frequency_hz: 440.0,
            unit_seconds: 0.05,
            attenuation: default_attenuation(),
        }
    }
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("/usr/share/dict/words"),
            ignore_chars: default_ignore_chars(),
            word_length_min: 2,
            word_length_max: 6,
            words_min: 1,
            words_max: 3,
        }
    }
}

impl AppSettings {
    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("morse_trainer").join("settings.toml")
        } else {
            PathBuf::from("settings.toml")
        }
    }

    /// Load settings from `path_override` or the default config path,
    /// falling back to defaults with a logged notice
    pub fn load_or_default(path_override: Option<&Path>) -> Self {
        let path = path_override
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        match Self::load(&path) {
            Ok(settings) => {
                log::debug!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                if path.exists() || path_override.is_some() {
                    log::warn!("ignoring settings at {}: {err:#}", path.display());
                } else {
                    log::debug!("no settings at {}; using defaults", path.display());
                }
                Self::default()
            }
        }
    }

    fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }
}
