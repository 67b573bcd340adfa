use std::collections::HashMap;

/// Record of a single drill round for analysis
#[derive(Clone, Debug)]
pub struct RoundRecord {
    pub expected: String,
    pub entered: String,
    pub hit: bool,
}

/// Session statistics collector and analyzer
#[derive(Clone, Debug, Default)]
pub struct SessionStats {
    pub rounds: Vec<RoundRecord>,
}

/// Analysis results for display
#[derive(Clone, Debug, Default)]
pub struct StatsAnalysis {
    pub total_rounds: usize,
    pub hits: usize,
    pub accuracy: f32,
    pub char_error_rates: Vec<(char, f32, usize)>, // (char, error_rate, total_count)
}

impl SessionStats {
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    pub fn log_round(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    pub fn analyze(&self) -> StatsAnalysis {
        if self.rounds.is_empty() {
            return StatsAnalysis::default();
        }

        let total_rounds = self.rounds.len();
        let hits = self.rounds.iter().filter(|r| r.hit).count();
        let accuracy = (hits as f32 / total_rounds as f32) * 100.0;
        let char_error_rates = self.analyze_character_errors();

        StatsAnalysis {
            total_rounds,
            hits,
            accuracy,
            char_error_rates,
        }
    }

    fn analyze_character_errors(&self) -> Vec<(char, f32, usize)> {
        let mut char_totals: HashMap<char, usize> = HashMap::new();
        let mut char_errors: HashMap<char, usize> = HashMap::new();

        for round in &self.rounds {
            // Always count totals for every character the user heard
            Self::count_chars(&round.expected, &mut char_totals);

            // Only count errors when the round was actually missed
            if !round.hit {
                Self::count_errors(&round.expected, &round.entered, &mut char_errors);
            }
        }

        let mut results: Vec<(char, f32, usize)> = char_totals
            .iter()
            .map(|(&ch, &total)| {
                let errors = *char_errors.get(&ch).unwrap_or(&0);
                let error_rate = if total > 0 {
                    (errors as f32 / total as f32) * 100.0
                } else {
                    0.0
                };
                (ch, error_rate, total)
            })
            .filter(|(_, _, total)| *total >= 3) // Only show chars with enough samples
            .collect();

        // Sort by error rate descending, then by character for stable ordering
        results.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        results
    }

    /// Count occurrences of each alphanumeric character in a string
    fn count_chars(s: &str, totals: &mut HashMap<char, usize>) {
        for ch in s.to_lowercase().chars() {
            if ch.is_alphanumeric() {
                *totals.entry(ch).or_insert(0) += 1;
            }
        }
    }

    /// Count character errors by comparing expected vs entered strings
    fn count_errors(expected: &str, entered: &str, errors: &mut HashMap<char, usize>) {
        let expected_chars: Vec<char> = expected.to_lowercase().chars().collect();
        let entered_chars: Vec<char> = entered.to_lowercase().chars().collect();

        for (i, &expected_char) in expected_chars.iter().enumerate() {
            if !expected_char.is_alphanumeric() {
                continue;
            }

            let matches = entered_chars
                .get(i)
                .map(|&ch| ch == expected_char)
                .unwrap_or(false);

            if !matches {
                *errors.entry(expected_char).or_insert(0) += 1;
            }
        }
    }
}
