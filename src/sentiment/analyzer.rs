//! Lexicon-based polarity scoring

use std::collections::{HashMap, HashSet};

use crate::error::{PulseError, Result};
use crate::types::SentimentScores;

/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;

/// Valence shift contributed by an intensity modifier
const BOOST_INCR: f64 = 0.293;

/// Scalar applied when a negation precedes a scored word
const NEGATION_SCALAR: f64 = -0.74;

/// How far back modifiers are looked up, in tokens
const MODIFIER_WINDOW: usize = 3;

/// Bundled word valence table, parsed once at construction
const LEXICON: &str = include_str!("lexicon.txt");

/// Sentiment analyzer over a fixed word valence lexicon.
///
/// Construct once and pass by reference; scoring is pure and deterministic
/// for identical input text.
#[derive(Debug)]
pub struct SentimentAnalyzer {
    /// Word valences in [-4, 4]
    lexicon: HashMap<String, f64>,
    /// Intensity modifiers and their signed increments
    boosters: HashMap<&'static str, f64>,
    /// Words that flip and dampen the following valence
    negations: HashSet<&'static str>,
}

impl SentimentAnalyzer {
    /// Load the bundled lexicon. Fails with `LexiconLoad` when the
    /// resource is corrupt, which is fatal to the scoring capability.
    pub fn new() -> Result<Self> {
        Self::from_lexicon_str(LEXICON)
    }

    /// Parse a lexicon from `token<TAB>valence` lines.
    pub fn from_lexicon_str(raw: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();

        for (lineno, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(2, '\t');
            let token = parts.next().unwrap_or_default();
            let valence = parts
                .next()
                .ok_or_else(|| {
                    PulseError::LexiconLoad(format!("line {}: missing valence", lineno + 1))
                })?
                .trim()
                .parse::<f64>()
                .map_err(|e| {
                    PulseError::LexiconLoad(format!("line {}: {}", lineno + 1, e))
                })?;

            lexicon.insert(token.to_lowercase(), valence);
        }

        if lexicon.is_empty() {
            return Err(PulseError::LexiconLoad(
                "lexicon contains no entries".to_string(),
            ));
        }

        Ok(Self {
            lexicon,
            boosters: Self::default_boosters(),
            negations: Self::default_negations(),
        })
    }

    fn default_boosters() -> HashMap<&'static str, f64> {
        let entries = [
            ("absolutely", BOOST_INCR),
            ("completely", BOOST_INCR),
            ("considerably", BOOST_INCR),
            ("deeply", BOOST_INCR),
            ("enormously", BOOST_INCR),
            ("entirely", BOOST_INCR),
            ("especially", BOOST_INCR),
            ("extremely", BOOST_INCR),
            ("greatly", BOOST_INCR),
            ("highly", BOOST_INCR),
            ("hugely", BOOST_INCR),
            ("incredibly", BOOST_INCR),
            ("majorly", BOOST_INCR),
            ("really", BOOST_INCR),
            ("remarkably", BOOST_INCR),
            ("so", BOOST_INCR),
            ("substantially", BOOST_INCR),
            ("totally", BOOST_INCR),
            ("tremendously", BOOST_INCR),
            ("truly", BOOST_INCR),
            ("very", BOOST_INCR),
            ("almost", -BOOST_INCR),
            ("barely", -BOOST_INCR),
            ("hardly", -BOOST_INCR),
            ("kinda", -BOOST_INCR),
            ("marginally", -BOOST_INCR),
            ("partly", -BOOST_INCR),
            ("slightly", -BOOST_INCR),
            ("somewhat", -BOOST_INCR),
        ];
        entries.into_iter().collect()
    }

    fn default_negations() -> HashSet<&'static str> {
        [
            "not", "no", "never", "none", "neither", "nobody", "nothing", "nowhere",
            "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't",
            "doesn't", "don't", "didn't", "won't", "wouldn't", "can't", "cannot",
            "couldn't", "shouldn't", "without",
        ]
        .into_iter()
        .collect()
    }

    /// Score one text. Proportions sum to 1.0 within floating tolerance
    /// and the compound score stays inside [-1, 1].
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(clean_token)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return SentimentScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound: 0.0,
            };
        }

        // One valence per token; words outside the lexicon contribute 0
        // and count toward the neutral proportion.
        let valences: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let base = match self.lexicon.get(token.as_str()) {
                    Some(&v) => v,
                    None => return 0.0,
                };
                self.apply_modifiers(&tokens, i, base)
            })
            .collect();

        let sum: f64 = valences.iter().sum();
        let compound = normalize(sum);

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                pos_sum += v + 1.0;
            } else if v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        if total <= 0.0 {
            return SentimentScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound,
            };
        }

        SentimentScores {
            neg: neg_sum.abs() / total,
            neu: neu_count / total,
            pos: pos_sum / total,
            compound,
        }
    }

    /// Scan up to [`MODIFIER_WINDOW`] preceding tokens for boosters and
    /// negations, nearer tokens weighing more.
    fn apply_modifiers(&self, tokens: &[String], index: usize, base: f64) -> f64 {
        let mut valence = base;
        let start = index.saturating_sub(MODIFIER_WINDOW);

        for (distance, i) in (start..index).rev().enumerate() {
            let prev = tokens[i].as_str();

            if let Some(&incr) = self.boosters.get(prev) {
                let damping = match distance {
                    0 => 1.0,
                    1 => 0.95,
                    _ => 0.9,
                };
                if valence >= 0.0 {
                    valence += incr * damping;
                } else {
                    valence -= incr * damping;
                }
            }

            if self.negations.contains(prev) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence.clamp(-4.0, 4.0)
    }
}

/// Lowercase and strip punctuation, keeping apostrophes and hyphens so
/// contractions like "don't" survive.
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

/// Map a raw valence sum into [-1, 1].
fn normalize(sum: f64) -> f64 {
    let norm = sum / (sum * sum + ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new().expect("bundled lexicon must parse")
    }

    #[test]
    fn test_positive_text() {
        let scores = analyzer().polarity_scores("Great success and record profit");
        assert!(scores.compound > 0.05);
        assert_eq!(Label::from_compound(scores.compound), Label::Positive);
    }

    #[test]
    fn test_negative_text() {
        let scores = analyzer().polarity_scores("Crisis deepens as markets crash");
        assert!(scores.compound < -0.05);
        assert_eq!(Label::from_compound(scores.compound), Label::Negative);
    }

    #[test]
    fn test_neutral_text() {
        let scores = analyzer().polarity_scores("The committee met on Tuesday");
        assert!(scores.compound.abs() < 0.05);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let texts = [
            "Great win for the home team",
            "Terrible loss and deep crisis",
            "The meeting is scheduled for noon",
            "",
            "Mixed: great results but serious concern remains",
        ];
        for text in texts {
            let s = analyzer().polarity_scores(text);
            assert!(
                ((s.neg + s.neu + s.pos) - 1.0).abs() < 1e-9,
                "proportions must sum to 1 for {:?}",
                text
            );
            assert!(s.compound >= -1.0 && s.compound <= 1.0);
        }
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let s = analyzer().polarity_scores("");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neu, 1.0);
    }

    #[test]
    fn test_booster_amplifies() {
        let a = analyzer();
        let plain = a.polarity_scores("good results");
        let boosted = a.polarity_scores("extremely good results");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_dampener_weakens() {
        let a = analyzer();
        let plain = a.polarity_scores("good results");
        let damped = a.polarity_scores("slightly good results");
        assert!(damped.compound < plain.compound);
        assert!(damped.compound > 0.0);
    }

    #[test]
    fn test_negation_flips() {
        let a = analyzer();
        let plain = a.polarity_scores("this is good");
        let negated = a.polarity_scores("this is not good");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = analyzer();
        let first = a.polarity_scores("Strong growth beats fear of recession");
        let second = a.polarity_scores("Strong growth beats fear of recession");
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_lexicon_rejected() {
        let err = SentimentAnalyzer::from_lexicon_str("good\tnot-a-number").unwrap_err();
        assert!(matches!(err, PulseError::LexiconLoad(_)));

        let err = SentimentAnalyzer::from_lexicon_str("# only comments\n\n").unwrap_err();
        assert!(matches!(err, PulseError::LexiconLoad(_)));

        let err = SentimentAnalyzer::from_lexicon_str("good").unwrap_err();
        assert!(matches!(err, PulseError::LexiconLoad(_)));
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let a = analyzer();
        let upper = a.polarity_scores("GREAT!");
        let lower = a.polarity_scores("great");
        assert_eq!(upper.compound, lower.compound);
    }
}
