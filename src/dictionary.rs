use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::TrainingError;

/// Pool of practice words bucketed by character length
pub struct WordPool {
    words_by_length: HashMap<usize, Vec<String>>,
}

impl WordPool {
    /// Load words from a file, one per line
    ///
    /// Lines are trimmed, lines containing any ignore-set character are
    /// dropped, and the rest are lowercased and de-duplicated.
    pub fn load<P: AsRef<Path>>(path: P, ignore_chars: &str) -> Result<Self, TrainingError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| TrainingError::DictionaryUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let pool = Self::parse(&content, ignore_chars);
        if pool.is_empty() {
            return Err(TrainingError::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }

        Ok(pool)
    }

    /// Build a pool from raw word-list text
    pub fn parse(content: &str, ignore_chars: &str) -> Self {
        let mut words_by_length: HashMap<usize, Vec<String>> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();

        for line in content.lines() {
            let word = line.trim();
            if word.is_empty() || word.chars().any(|ch| ignore_chars.contains(ch)) {
                continue;
            }
            let word = word.to_lowercase();
            if !seen.insert(word.clone()) {
                continue;
            }
            words_by_length
                .entry(word.chars().count())
                .or_default()
                .push(word);
        }

        Self { words_by_length }
    }

    pub fn is_empty(&self) -> bool {
        self.words_by_length.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.words_by_length.values().map(Vec::len).sum()
    }

    /// Pick a random word whose length falls within the given bounds
    ///
    /// The draw happens in two stages: first a length among those bounds
    /// that actually have words, then a word of that length. Words in
    /// sparsely populated lengths therefore come up more often than a
    /// flat draw over the whole pool would give them.
    pub fn pick_word(&self, min_length: usize, max_length: usize) -> Result<String, TrainingError> {
        if min_length < 1 || min_length > max_length {
            return Err(TrainingError::InvalidRange {
                min: min_length,
                max: max_length,
            });
        }

        let lengths: Vec<usize> = (min_length..=max_length)
            .filter(|len| self.words_by_length.contains_key(len))
            .collect();

        let mut rng = rand::thread_rng();
        lengths
            .choose(&mut rng)
            .and_then(|len| self.words_by_length.get(len))
            .and_then(|words| words.choose(&mut rng))
            .cloned()
            .ok_or(TrainingError::NoWordsAvailable {
                min_length,
                max_length,
            })
    }

    /// Pick a space-joined run of words for one drill round
    pub fn pick_sentence(
        &self,
        min_words: usize,
        max_words: usize,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, TrainingError> {
        if min_words < 1 || min_words > max_words {
            return Err(TrainingError::InvalidRange {
                min: min_words,
                max: max_words,
            });
        }

        let count = rand::thread_rng().gen_range(min_words..=max_words);
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(self.pick_word(min_length, max_length)?);
        }

        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_and_dedupes() {
        let pool = WordPool::parse("Cat\ncat\nDOG\n", "-./");
        assert_eq!(pool.word_count(), 2);
    }

    #[test]
    fn test_parse_applies_ignore_set() {
        let pool = WordPool::parse("dry-run\ncat\netc.\na/b\n", "-./");
        assert_eq!(pool.word_count(), 1);
        assert_eq!(pool.pick_word(3, 3).unwrap(), "cat");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let pool = WordPool::parse("\n   \ncat\n\n", "");
        assert_eq!(pool.word_count(), 1);
    }

    #[test]
    fn test_pick_word_respects_bounds() {
        let pool = WordPool::parse("cat\ndog\nbird\n", "");
        for _ in 0..50 {
            let word = pool.pick_word(3, 3).unwrap();
            assert!(word == "cat" || word == "dog");
        }
        assert_eq!(pool.pick_word(4, 4).unwrap(), "bird");
    }

    #[test]
    fn test_pick_word_covers_the_bucket() {
        let pool = WordPool::parse("cat\ndog\n", "");
        let mut seen_cat = false;
        let mut seen_dog = false;
        for _ in 0..200 {
            match pool.pick_word(3, 3).unwrap().as_str() {
                "cat" => seen_cat = true,
                "dog" => seen_dog = true,
                other => panic!("unexpected word {other}"),
            }
        }
        assert!(seen_cat && seen_dog);
    }

    #[test]
    fn test_pick_word_no_words_in_range() {
        let pool = WordPool::parse("cat\ndog\n", "");
        assert!(matches!(
            pool.pick_word(20, 25),
            Err(TrainingError::NoWordsAvailable { .. })
        ));
    }

    #[test]
    fn test_pick_word_invalid_range() {
        let pool = WordPool::parse("cat\n", "");
        assert!(matches!(
            pool.pick_word(0, 3),
            Err(TrainingError::InvalidRange { .. })
        ));
        assert!(matches!(
            pool.pick_word(5, 2),
            Err(TrainingError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let pool = WordPool::parse("café\n", "");
        assert_eq!(pool.pick_word(4, 4).unwrap(), "café");
    }

    #[test]
    fn test_pick_sentence_bounds() {
        let pool = WordPool::parse("cat\ndog\n", "");
        for _ in 0..50 {
            let sentence = pool.pick_sentence(2, 4, 3, 3).unwrap();
            let words: Vec<&str> = sentence.split_whitespace().collect();
            assert!(words.len() >= 2 && words.len() <= 4);
            for word in words {
                assert!(word == "cat" || word == "dog");
            }
        }
    }

    #[test]
    fn test_pick_sentence_invalid_ranges() {
        let pool = WordPool::parse("cat\n", "");
        assert!(matches!(
            pool.pick_sentence(0, 2, 3, 3),
            Err(TrainingError::InvalidRange { .. })
        ));
        assert!(matches!(
            pool.pick_sentence(3, 1, 3, 3),
            Err(TrainingError::InvalidRange { .. })
        ));
        assert!(matches!(
            pool.pick_sentence(1, 2, 8, 9),
            Err(TrainingError::NoWordsAvailable { .. })
        ));
    }
}
