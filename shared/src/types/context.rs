//! Retrieved decade context used to ground freeform chat

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecadeContext {
    pub stories: Vec<Story>,
    pub culture: Vec<Topic>,
    pub lifestyle: Vec<Topic>,
    pub currency: Vec<Currency>,
    pub food: Vec<Topic>,
    pub phrases: Vec<Phrase>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub topic: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    /// Source files mix numeric and textual values
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrase {
    pub phrase: String,
    pub meaning: String,
}

impl DecadeContext {
    /// Minimal two-entry context returned when the real one cannot be read
    pub fn fallback(decade: u16) -> Self {
        Self {
            stories: vec![Story {
                title: format!("Life in the {decade}s"),
                text: "This was an interesting time period.".to_string(),
            }],
            phrases: vec![Phrase {
                phrase: "Common greeting".to_string(),
                meaning: "How people greeted each other".to_string(),
            }],
            ..Self::default()
        }
    }

    /// Total number of snippets across all topics
    pub fn entry_count(&self) -> usize {
        self.stories.len()
            + self.culture.len()
            + self.lifestyle.len()
            + self.currency.len()
            + self.food.len()
            + self.phrases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_context_has_two_entries() {
        let context = DecadeContext::fallback(1960);

        assert_eq!(context.entry_count(), 2);
        assert_eq!(context.stories[0].title, "Life in the 1960s");
        assert_eq!(context.phrases[0].phrase, "Common greeting");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let context: DecadeContext =
            serde_json::from_str(r#"{"food":[{"topic":"Tea","text":"Chai everywhere"}]}"#).unwrap();

        assert_eq!(context.food.len(), 1);
        assert!(context.stories.is_empty());
        assert!(context.currency.is_empty());
    }
}
