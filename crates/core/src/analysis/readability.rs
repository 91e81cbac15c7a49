use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::DisplayColor;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Qualitative band for a Flesch reading-ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityBand {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryConfusing,
}

impl ReadabilityBand {
    /// Maps a score to its band. Each lower bound is inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryConfusing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryConfusing => "Very Confusing",
        }
    }

    pub fn color(self) -> DisplayColor {
        match self {
            Self::VeryEasy | Self::Easy | Self::FairlyEasy => DisplayColor::Green,
            Self::Standard => DisplayColor::Orange,
            Self::FairlyDifficult | Self::Difficult | Self::VeryConfusing => DisplayColor::Red,
        }
    }
}

impl fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A Flesch reading-ease score and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readability {
    pub score: f64,
    pub band: ReadabilityBand,
}

impl Readability {
    /// Scores `text`. Text without any word scores 0.0.
    pub fn of(text: &str) -> Self {
        let score = flesch_reading_ease(text);
        Self { score, band: ReadabilityBand::from_score(score) }
    }
}

/// Flesch reading ease: `206.835 - 1.015 * ASL - 84.6 * ASW`.
///
/// ASL is words per sentence and ASW syllables per word. Only tokens holding
/// an alphanumeric character count as words.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .collect();

    if words.is_empty() {
        return 0.0;
    }

    let word_total = words.len() as f64;
    let sentence_total = sentence_count(text).max(1) as f64;
    let syllable_total = words.iter().map(|w| syllable_count(w)).sum::<usize>() as f64;

    206.835 - 1.015 * (word_total / sentence_total) - 84.6 * (syllable_total / word_total)
}

/// Counts segments between `.`, `!` and `?` runs that hold any alphanumeric text.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Heuristic English syllable count for a single word, at least 1.
///
/// Counts vowel groups, then drops a silent trailing `e` unless the word
/// ends in consonant + `le` ("table", "simple").
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let mut count: usize = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) {
        let consonant_le = letters[n - 2] == 'l' && n > 3 && !is_vowel(letters[n - 3]);
        if !consonant_le {
            count = count.saturating_sub(1);
        }
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(120.0, ReadabilityBand::VeryEasy)]
    #[case(90.0, ReadabilityBand::VeryEasy)]
    #[case(89.99, ReadabilityBand::Easy)]
    #[case(80.0, ReadabilityBand::Easy)]
    #[case(70.0, ReadabilityBand::FairlyEasy)]
    #[case(60.0, ReadabilityBand::Standard)]
    #[case(59.5, ReadabilityBand::FairlyDifficult)]
    #[case(50.0, ReadabilityBand::FairlyDifficult)]
    #[case(30.0, ReadabilityBand::Difficult)]
    #[case(29.99, ReadabilityBand::VeryConfusing)]
    #[case(-45.0, ReadabilityBand::VeryConfusing)]
    fn test_band_boundaries(#[case] score: f64, #[case] expected: ReadabilityBand) {
        assert_eq!(ReadabilityBand::from_score(score), expected);
    }

    #[rstest]
    #[case(ReadabilityBand::VeryEasy, DisplayColor::Green)]
    #[case(ReadabilityBand::Easy, DisplayColor::Green)]
    #[case(ReadabilityBand::FairlyEasy, DisplayColor::Green)]
    #[case(ReadabilityBand::Standard, DisplayColor::Orange)]
    #[case(ReadabilityBand::FairlyDifficult, DisplayColor::Red)]
    #[case(ReadabilityBand::Difficult, DisplayColor::Red)]
    #[case(ReadabilityBand::VeryConfusing, DisplayColor::Red)]
    fn test_band_colors(#[case] band: ReadabilityBand, #[case] color: DisplayColor) {
        assert_eq!(band.color(), color);
    }

    #[rstest]
    #[case("cat", 1)]
    #[case("the", 1)]
    #[case("make", 1)]
    #[case("table", 2)]
    #[case("reading", 2)]
    #[case("beautiful", 3)]
    #[case("Readability!", 5)]
    #[case("2024", 1)]
    fn test_syllables(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(syllable_count(word), expected);
    }

    #[test]
    fn test_simple_sentence_score() {
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert!((score - 116.145).abs() < 1e-9, "score was {}", score);
        assert_eq!(ReadabilityBand::from_score(score), ReadabilityBand::VeryEasy);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("Wait... what?!"), 2);
        assert_eq!(sentence_count("no terminator"), 1);
        assert_eq!(sentence_count("..."), 0);
    }

    #[test]
    fn test_longer_words_lower_the_score() {
        let plain = flesch_reading_ease("We go to the park. It is fun.");
        let dense = flesch_reading_ease(
            "Institutional considerations necessitate comprehensive reevaluation of organizational methodologies.",
        );
        assert!(plain > dense);
        assert_eq!(ReadabilityBand::from_score(dense), ReadabilityBand::VeryConfusing);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease(" -- ... "), 0.0);
        let readability = Readability::of("");
        assert_eq!(readability.band, ReadabilityBand::VeryConfusing);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(ReadabilityBand::FairlyDifficult.to_string(), "Fairly Difficult");
    }
}
