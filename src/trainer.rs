use crate::config::TrainingSettings;
use crate::dictionary::WordPool;
use crate::error::TrainingError;
use crate::stats::{RoundRecord, SessionStats};

/// One interactive drill session: draws challenges and scores answers
pub struct TrainingSession {
    pool: WordPool,
    settings: TrainingSettings,
    stats: SessionStats,
}

impl TrainingSession {
    pub fn new(pool: WordPool, settings: TrainingSettings) -> Self {
        Self {
            pool,
            settings,
            stats: SessionStats::new(),
        }
    }

    /// Draw the next challenge text within the configured bounds
    pub fn next_challenge(&self) -> Result<String, TrainingError> {
        self.pool.pick_sentence(
            self.settings.words_min,
            self.settings.words_max,
            self.settings.word_length_min,
            self.settings.word_length_max,
        )
    }

    /// Score an answer against the challenge and record the round
    pub fn grade(&mut self, expected: &str, entered: &str) -> bool {
        let hit = normalize(entered) == normalize(expected);
        self.stats.log_round(RoundRecord {
            expected: expected.to_string(),
            entered: entered.trim().to_string(),
            hit,
        });
        hit
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

/// Collapse runs of whitespace and fold case before comparing
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
