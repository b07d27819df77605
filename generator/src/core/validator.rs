//! Specificity validation for structured year content
//!
//! The score starts at 100, loses a fixed penalty per fail-note and gains a
//! capped bonus for each literal mention of the target year. Content below
//! the regeneration threshold must not be accepted.

use regex::{Regex, RegexBuilder};

use shared::{StructuredContent, ValidationReport};
use tracing::warn;

use crate::config::ValidatorSettings;
use crate::error::{GeneratorError, GeneratorResult};

/// Scores structured content against a target year
#[derive(Debug, Clone)]
pub struct ContentValidator {
    settings: ValidatorSettings,
    /// (phrase, case-insensitive matcher) in configured order
    banned: Vec<(String, Regex)>,
}

impl ContentValidator {
    pub fn new(settings: ValidatorSettings) -> GeneratorResult<Self> {
        let banned = compile_banned(&settings.banned_phrases)?;
        Ok(Self { settings, banned })
    }

    /// Validate `content` for `year`; pure, so repeated calls agree
    pub fn validate(&self, content: &StructuredContent, year: u16) -> ValidationReport {
        let year_text = format!("{year:04}");
        let serialized = match content.to_json_text() {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Content could not be serialized for validation: {}", e);
                return ValidationReport {
                    is_valid: false,
                    errors: vec![format!("Content could not be serialized: {e}")],
                    specificity_score: 0,
                    requires_regeneration: true,
                };
            }
        };
        let mut errors = Vec::new();

        if !serialized.contains(&year_text) {
            errors.push(format!("Content never mentions the year {year_text}"));
        }

        if content.major_events.is_empty() {
            errors.push("majorEvents is missing, empty or malformed".to_string());
        } else {
            for (index, event) in content.major_events.iter().enumerate() {
                if !event.date.contains(&year_text) {
                    errors.push(format!(
                        "Event {} (\"{}\") has date \"{}\" without {year_text}",
                        index + 1,
                        event.title,
                        event.date
                    ));
                }
            }
        }

        let hits = content.music.hits.len();
        if hits < self.settings.min_music_hits {
            errors.push(format!(
                "Only {hits} music hits listed, at least {} required",
                self.settings.min_music_hits
            ));
        }

        for (phrase, matcher) in &self.banned {
            for (occurrence, _) in matcher.find_iter(&serialized).enumerate() {
                errors.push(format!(
                    "Generic phrase \"{phrase}\" used (occurrence {})",
                    occurrence + 1
                ));
            }
        }

        let year_mentions = serialized.matches(&year_text).count() as u32;
        let score = self.score(errors.len(), year_mentions);

        ValidationReport {
            is_valid: errors.is_empty(),
            requires_regeneration: score < self.settings.regeneration_threshold,
            specificity_score: score,
            errors,
        }
    }

    fn score(&self, notes: usize, year_mentions: u32) -> u8 {
        let penalty = i64::from(self.settings.penalty_per_note) * notes as i64;
        let bonus = i64::from(
            self.settings
                .bonus_per_year_mention
                .saturating_mul(year_mentions)
                .min(self.settings.max_year_bonus),
        );
        (100 - penalty + bonus).clamp(0, 100) as u8
    }
}

/// Case-insensitive literal matchers for each non-blank phrase
fn compile_banned(phrases: &[String]) -> GeneratorResult<Vec<(String, Regex)>> {
    phrases
        .iter()
        .filter(|phrase| !phrase.trim().is_empty())
        .map(|phrase| {
            RegexBuilder::new(&regex::escape(phrase))
                .case_insensitive(true)
                .build()
                .map(|matcher| (phrase.clone(), matcher))
                .map_err(|e| GeneratorError::config(format!("banned phrase '{phrase}': {e}")))
        })
        .collect()
}
