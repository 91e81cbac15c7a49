use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use super::DisplayColor;

/// Polarity of opinion words, on a -1.0 to 1.0 scale.
const LEXICON: &[(&str, f64)] = &[
    ("able", 0.5),
    ("abysmal", -1.0),
    ("amazing", 0.6),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awesome", 1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("boring", -1.0),
    ("brilliant", 0.9),
    ("broken", -0.4),
    ("calm", 0.3),
    ("careful", -0.1),
    ("cheap", 0.4),
    ("clean", 0.37),
    ("clear", 0.1),
    ("clever", 0.5),
    ("comfortable", 0.4),
    ("confusing", -0.3),
    ("cool", 0.35),
    ("correct", 0.3),
    ("crazy", -0.6),
    ("cruel", -1.0),
    ("cute", 0.5),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("delightful", 1.0),
    ("difficult", -0.5),
    ("dirty", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("dull", -0.31),
    ("easy", 0.43),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("enjoyable", 0.5),
    ("enjoyed", 0.4),
    ("evil", -1.0),
    ("excellent", 1.0),
    ("excited", 0.38),
    ("exciting", 0.3),
    ("fabulous", 0.4),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("fair", 0.7),
    ("fake", -0.5),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("favorite", 0.5),
    ("fine", 0.42),
    ("fortunate", 0.5),
    ("free", 0.4),
    ("fresh", 0.3),
    ("friendly", 0.38),
    ("fun", 0.3),
    ("funny", 0.25),
    ("glad", 0.5),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("grim", -0.5),
    ("guilty", -0.5),
    ("happy", 0.8),
    ("hard", -0.29),
    ("harmful", -0.6),
    ("hate", -0.8),
    ("healthy", 0.5),
    ("helpful", 0.5),
    ("honest", 0.6),
    ("horrible", -1.0),
    ("hostile", -0.6),
    ("ideal", 0.9),
    ("ill", -0.5),
    ("important", 0.4),
    ("impressive", 1.0),
    ("incorrect", -0.5),
    ("inferior", -0.5),
    ("interesting", 0.5),
    ("junk", -0.5),
    ("kind", 0.6),
    ("lazy", -0.25),
    ("like", 0.2),
    ("lost", -0.3),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("mad", -0.63),
    ("mediocre", -0.4),
    ("messy", -0.4),
    ("miserable", -1.0),
    ("nasty", -1.0),
    ("negative", -0.3),
    ("nice", 0.6),
    ("pathetic", -1.0),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("poor", -0.4),
    ("popular", 0.6),
    ("positive", 0.23),
    ("powerful", 0.3),
    ("pretty", 0.25),
    ("problem", -0.3),
    ("proud", 0.8),
    ("quiet", -0.1),
    ("reliable", 0.5),
    ("rich", 0.38),
    ("rude", -0.6),
    ("sad", -0.5),
    ("safe", 0.5),
    ("scary", -0.5),
    ("secure", 0.4),
    ("selfish", -0.6),
    ("serious", -0.33),
    ("sick", -0.71),
    ("simple", 0.1),
    ("slow", -0.3),
    ("smart", 0.21),
    ("smooth", 0.4),
    ("sorry", -0.5),
    ("strong", 0.43),
    ("stupid", -0.8),
    ("success", 0.3),
    ("successful", 0.75),
    ("superb", 1.0),
    ("terrible", -1.0),
    ("terrific", 1.0),
    ("thankful", 0.5),
    ("tired", -0.4),
    ("tragic", -0.75),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("unhappy", -0.6),
    ("unpleasant", -0.5),
    ("upset", -0.5),
    ("useful", 0.3),
    ("useless", -0.5),
    ("valuable", 0.5),
    ("weak", -0.38),
    ("weird", -0.5),
    ("welcome", 0.8),
    ("win", 0.8),
    ("wonderful", 1.0),
    ("worse", -0.4),
    ("worst", -1.0),
    ("worthless", -0.8),
    ("wrong", -0.5),
];

/// Multipliers applied to the next opinion word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("barely", 0.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("most", 1.3),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nor", "cannot", "without"];

/// Factor applied to an opinion word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// A negation reaches at most this many following words.
const NEGATION_WINDOW: usize = 3;

static POLARITIES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| LEXICON.iter().copied().collect());
static INTENSITIES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classifies a polarity. Only an exact 0.0 is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity == 0.0 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    pub fn color(self) -> DisplayColor {
        match self {
            Self::Positive => DisplayColor::Green,
            Self::Neutral => DisplayColor::Blue,
            Self::Negative => DisplayColor::Red,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub polarity: f64,
}

impl Sentiment {
    pub fn of(text: &str) -> Self {
        let polarity = polarity(text);
        Self { label: SentimentLabel::from_polarity(polarity), polarity }
    }
}

/// Mean polarity of the opinion words in `text`, clamped to [-1.0, 1.0].
///
/// Text without any opinion word scores exactly 0.0.
pub fn polarity(text: &str) -> f64 {
    let mut assessments = Vec::new();
    let mut intensity: Option<f64> = None;
    let mut negation_left = 0;

    for word in text.unicode_words() {
        let word = word.to_lowercase();

        if is_negation(&word) {
            negation_left = NEGATION_WINDOW;
            continue;
        }

        if let Some(factor) = INTENSITIES.get(word.as_str()) {
            intensity = Some(intensity.unwrap_or(1.0) * factor);
            continue;
        }

        if let Some(value) = POLARITIES.get(word.as_str()) {
            let mut score = value * intensity.unwrap_or(1.0);
            if negation_left > 0 {
                score *= NEGATION_FACTOR;
            }
            assessments.push(score.clamp(-1.0, 1.0));
            negation_left = 0;
        } else {
            negation_left = negation_left.saturating_sub(1);
        }
        intensity = None;
    }

    if assessments.is_empty() {
        return 0.0;
    }

    let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
    mean.clamp(-1.0, 1.0)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}
