use crate::audio::morse::{self, Mark, MorseTiming};
use crate::audio::synth::{self, ENVELOPE_EXPONENT};
use crate::config::AudioSettings;
use crate::error::AudioError;

/// Renders text as a ready-to-play CW waveform
///
/// All five element buffers (dot, dash, and the three gap lengths) are
/// synthesized and shaped once at construction; `generate` only
/// concatenates them and applies the output attenuation.
pub struct MorseKeyer {
    dot: Vec<f32>,
    dash: Vec<f32>,
    element_gap: Vec<f32>,
    letter_gap: Vec<f32>,
    word_gap: Vec<f32>,
    attenuation: f32,
    sample_rate: u32,
}

impl MorseKeyer {
    pub fn new(settings: &AudioSettings) -> Result<Self, AudioError> {
        let timing = MorseTiming::new(settings.unit_seconds)?;
        let rate = settings.sample_rate;
        let freq = settings.tone_frequency_hz;

        let dot = synth::synthesize(timing.mark_seconds(Mark::Dot), freq, rate)?;
        let dash = synth::synthesize(timing.mark_seconds(Mark::Dash), freq, rate)?;
        let element_gap = synth::silence(timing.element_gap_seconds(), rate)?;
        let letter_gap = synth::silence(timing.letter_gap_seconds(), rate)?;
        let word_gap = synth::silence(timing.word_gap_seconds(), rate)?;

        Ok(Self {
            dot: synth::shape(dot, ENVELOPE_EXPONENT),
            dash: synth::shape(dash, ENVELOPE_EXPONENT),
            element_gap: synth::shape(element_gap, ENVELOPE_EXPONENT),
            letter_gap: synth::shape(letter_gap, ENVELOPE_EXPONENT),
            word_gap: synth::shape(word_gap, ENVELOPE_EXPONENT),
            attenuation: settings.attenuation,
            sample_rate: rate,
        })
    }

    /// Render one line of text as audio
    ///
    /// Leading and trailing whitespace is dropped, a space becomes a word
    /// gap, and characters without a pattern are skipped silently.
    pub fn generate(&self, text: &str) -> Vec<f32> {
        let mut waveform = Vec::new();

        for ch in text.trim().chars() {
            if let Some(marks) = morse::pattern(ch) {
                for &mark in marks {
                    match mark {
                        Mark::Dot => waveform.extend_from_slice(&self.dot),
                        Mark::Dash => waveform.extend_from_slice(&self.dash),
                    }
                    waveform.extend_from_slice(&self.element_gap);
                }
                waveform.extend_from_slice(&self.letter_gap);
            } else if ch == ' ' {
                waveform.extend_from_slice(&self.word_gap);
            }
        }

        for sample in waveform.iter_mut() {
            *sample *= self.attenuation;
        }

        waveform
    }

    /// Rate the element buffers were synthesized at
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keyer() -> MorseKeyer {
        MorseKeyer::new(&AudioSettings::default()).unwrap()
    }

    #[test]
    fn test_single_letter_sample_count() {
        // e = one dot: 2205 tone + 2205 element gap + 4410 letter gap
        let waveform = test_keyer().generate("e");
        assert_eq!(waveform.len(), 8820);
    }

    #[test]
    fn test_mark_and_gap_sample_counts() {
        // a = dot dash: (2205 + 2205) + (6615 + 2205) + 4410
        let waveform = test_keyer().generate("a");
        assert_eq!(waveform.len(), 17640);
    }

    #[test]
    fn test_word_gap_between_words() {
        let keyer = test_keyer();
        let single = keyer.generate("e").len();
        // The space contributes four units of silence
        assert_eq!(keyer.generate("e e").len(), single * 2 + 8820);
    }

    #[test]
    fn test_letter_is_marks_plus_gaps() {
        let keyer = test_keyer();
        let mut expected: Vec<f32> = Vec::new();
        expected.extend_from_slice(&keyer.dot);
        expected.extend_from_slice(&keyer.element_gap);
        expected.extend_from_slice(&keyer.letter_gap);
        for sample in expected.iter_mut() {
            *sample *= 0.3;
        }
        assert_eq!(keyer.generate("e"), expected);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let keyer = test_keyer();
        assert_eq!(keyer.generate("paris"), keyer.generate("paris"));
    }

    #[test]
    fn test_every_character_lays_out_marks_and_gaps() {
        let keyer = test_keyer();
        let timing = MorseTiming::new(0.05).unwrap();
        let element_gap = synth::silence(timing.element_gap_seconds(), 44100)
            .unwrap()
            .len();
        let letter_gap = synth::silence(timing.letter_gap_seconds(), 44100)
            .unwrap()
            .len();

        for ch in ('a'..='z').chain('0'..='9') {
            let marks = morse::pattern(ch).unwrap();
            let expected: usize = marks
                .iter()
                .map(|&mark| {
                    let tone = synth::synthesize(timing.mark_seconds(mark), 440.0, 44100)
                        .unwrap()
                        .len();
                    tone + element_gap
                })
                .sum::<usize>()
                + letter_gap;
            assert_eq!(keyer.generate(&ch.to_string()).len(), expected);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let keyer = test_keyer();
        assert_eq!(keyer.generate("SOS"), keyer.generate("sos"));
    }

    #[test]
    fn test_input_is_trimmed() {
        let keyer = test_keyer();
        assert_eq!(keyer.generate("  sos\n"), keyer.generate("sos"));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        let keyer = test_keyer();
        assert_eq!(keyer.generate("s!o?s"), keyer.generate("sos"));
        assert!(keyer.generate("!?#").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let keyer = test_keyer();
        assert!(keyer.generate("").is_empty());
        assert!(keyer.generate("   ").is_empty());
    }

    #[test]
    fn test_attenuation_caps_amplitude() {
        let waveform = test_keyer().generate("sos");
        let peak = waveform.iter().fold(0.0f32, |max, s| max.max(s.abs()));
        assert!(peak <= 0.3);
        assert!(peak > 0.2);
    }
}
