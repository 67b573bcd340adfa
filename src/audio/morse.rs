use crate::error::AudioError;

/// Dot length in units; the base of every other duration
pub const DOT_UNITS: f32 = 1.0;
/// Dash length in units
pub const DASH_UNITS: f32 = 3.0;
/// Silence between marks inside one character, in units
pub const ELEMENT_GAP_UNITS: f32 = 1.0;
/// Silence between letters, in units
pub const LETTER_GAP_UNITS: f32 = 2.0;
/// Silence between words, in units
pub const WORD_GAP_UNITS: f32 = 4.0;

/// A single audible element of a Morse character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Dot,
    Dash,
}

impl Mark {
    /// Duration of this mark in dot units
    pub fn units(self) -> f32 {
        match self {
            Mark::Dot => DOT_UNITS,
            Mark::Dash => DASH_UNITS,
        }
    }
}

/// Derives element and gap durations from the base dot duration
///
/// Letter and word gaps run 2 and 4 units here, tighter than the
/// ITU 3 and 7, which keeps drill rounds short.
#[derive(Clone, Copy, Debug)]
pub struct MorseTiming {
    unit_seconds: f32,
}

impl MorseTiming {
    pub fn new(unit_seconds: f32) -> Result<Self, AudioError> {
        if !unit_seconds.is_finite() || unit_seconds < 0.0 {
            return Err(AudioError::InvalidTiming {
                name: "unit_seconds",
                value: unit_seconds as f64,
            });
        }
        Ok(Self { unit_seconds })
    }

    /// Duration of a dot or dash in seconds
    pub fn mark_seconds(&self, mark: Mark) -> f32 {
        self.unit_seconds * mark.units()
    }

    pub fn element_gap_seconds(&self) -> f32 {
        self.unit_seconds * ELEMENT_GAP_UNITS
    }

    pub fn letter_gap_seconds(&self) -> f32 {
        self.unit_seconds * LETTER_GAP_UNITS
    }

    pub fn word_gap_seconds(&self) -> f32 {
        self.unit_seconds * WORD_GAP_UNITS
    }
}

/// Look up the mark sequence for a character, folding case
///
/// Returns `None` for anything outside `a-z` and `0-9`; callers
/// decide whether to skip or reject such characters.
pub fn pattern(ch: char) -> Option<&'static [Mark]> {
    use Mark::{Dash, Dot};

    let marks: &'static [Mark] = match ch.to_ascii_lowercase() {
        'a' => &[Dot, Dash],
        'b' => &[Dash, Dot, Dot, Dot],
        'c' => &[Dash, Dot, Dash, Dot],
        'd' => &[Dash, Dot, Dot],
        'e' => &[Dot],
        'f' => &[Dot, Dot, Dash, Dot],
        'g' => &[Dash, Dash, Dot],
        'h' => &[Dot, Dot, Dot, Dot],
        'i' => &[Dot, Dot],
        'j' => &[Dot, Dash, Dash, Dash],
        'k' => &[Dash, Dot, Dash],
        'l' => &[Dot, Dash, Dot, Dot],
        'm' => &[Dash, Dash],
        'n' => &[Dash, Dot],
        'o' => &[Dash, Dash, Dash],
        'p' => &[Dot, Dash, Dash, Dot],
        'q' => &[Dash, Dash, Dot, Dash],
        'r' => &[Dot, Dash, Dot],
        's' => &[Dot, Dot, Dot],
        't' => &[Dash],
        'u' => &[Dot, Dot, Dash],
        'v' => &[Dot, Dot, Dot, Dash],
        'w' => &[Dot, Dash, Dash],
        'x' => &[Dash, Dot, Dot, Dash],
        'y' => &[Dash, Dot, Dash, Dash],
        'z' => &[Dash, Dash, Dot, Dot],
        '0' => &[Dash, Dash, Dash, Dash, Dash],
        '1' => &[Dot, Dash, Dash, Dash, Dash],
        '2' => &[Dot, Dot, Dash, Dash, Dash],
        '3' => &[Dot, Dot, Dot, Dash, Dash],
        '4' => &[Dot, Dot, Dot, Dot, Dash],
        '5' => &[Dot, Dot, Dot, Dot, Dot],
        '6' => &[Dash, Dot, Dot, Dot, Dot],
        '7' => &[Dash, Dash, Dot, Dot, Dot],
        '8' => &[Dash, Dash, Dash, Dot, Dot],
        '9' => &[Dash, Dash, Dash, Dash, Dot],
        _ => return None,
    };

    Some(marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lookup() {
        use Mark::{Dash, Dot};
        assert_eq!(pattern('a'), Some(&[Dot, Dash][..]));
        assert_eq!(pattern('s'), Some(&[Dot, Dot, Dot][..]));
        assert_eq!(pattern('o'), Some(&[Dash, Dash, Dash][..]));
        assert_eq!(pattern('0'), Some(&[Dash, Dash, Dash, Dash, Dash][..]));
    }

    #[test]
    fn test_pattern_folds_case() {
        assert_eq!(pattern('Q'), pattern('q'));
        assert_eq!(pattern('E'), pattern('e'));
    }

    #[test]
    fn test_pattern_covers_all_alphanumerics() {
        for ch in ('a'..='z').chain('0'..='9') {
            let marks = pattern(ch);
            assert!(marks.is_some(), "missing pattern for {ch}");
            assert!(!marks.unwrap().is_empty(), "empty pattern for {ch}");
        }
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(pattern('!'), None);
        assert_eq!(pattern(' '), None);
        assert_eq!(pattern('é'), None);
    }

    #[test]
    fn test_timing_ratios() {
        let timing = MorseTiming::new(0.05).unwrap();
        let unit = timing.mark_seconds(Mark::Dot);
        assert_eq!(unit, 0.05);
        assert_eq!(timing.mark_seconds(Mark::Dash), unit * 3.0);
        assert_eq!(timing.element_gap_seconds(), unit);
        assert_eq!(timing.letter_gap_seconds(), unit * 2.0);
        assert_eq!(timing.word_gap_seconds(), unit * 4.0);
    }

    #[test]
    fn test_invalid_unit_rejected() {
        assert!(MorseTiming::new(-0.01).is_err());
        assert!(MorseTiming::new(f32::NAN).is_err());
        assert!(MorseTiming::new(0.0).is_ok());
    }
}
