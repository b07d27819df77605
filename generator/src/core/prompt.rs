//! Prompt construction for freeform chat and structured year content

use shared::decade_of;

use crate::config::GeneratorConfig;

/// Appended to context that had to be cut short
pub const TRUNCATION_MARKER: &str = "...";

/// Builds instruction text from request parameters (pure, deterministic)
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    /// Maximum characters of retrieved context embedded in a chat prompt
    context_char_limit: usize,
    banned_phrases: Vec<String>,
}

impl PromptBuilder {
    pub fn new(context_char_limit: usize, banned_phrases: Vec<String>) -> Self {
        Self {
            context_char_limit,
            banned_phrases,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.context_char_limit, config.validator.banned_phrases.clone())
    }

    /// Persona prompt for conversational answers grounded in decade context
    pub fn chat_prompt(&self, context: &str, question: &str, decade: u16) -> String {
        let trimmed_context = truncate_context(context, self.context_char_limit);

        format!(
            r#"You are a friendly Indian person living in the {decade}s, casually chatting.
Use the following historical context to inform your responses:
{trimmed_context}

User question: {question}

Respond in a conversational, period-appropriate way as someone from the {decade}s India."#
        )
    }

    /// Instruction template for the structured year-content JSON
    pub fn year_content_prompt(&self, year: u16) -> String {
        let decade = decade_of(year);
        let banned = self
            .banned_phrases
            .iter()
            .map(|phrase| format!("- \"{phrase}\""))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Generate historical content about India for the single year {year} (not the whole {decade}s).

STRICT REQUIREMENTS:
1. Every "date" field MUST literally contain the year {year} (for example "March {year}").
2. List at least 3 real songs released or popular in {year}, each with its title and a short description.
3. Everything must be specific to {year}. Never use these generic phrases:
{banned}
4. Respond with ONLY a JSON object matching the schema below. No markdown, no code fences, no text before or after the JSON.

SCHEMA:
{{
  "introduction": "string mentioning {year}",
  "music": {{
    "hits": [{{ "title": "string", "description": "string" }}],
    "trends": ["string"]
  }},
  "majorEvents": [{{ "date": "string containing {year}", "title": "string", "description": "string" }}],
  "fashion": {{ "mens": ["string"], "womens": ["string"], "accessories": ["string"] }},
  "ideologies": {{ "political": ["string"], "social": ["string"], "economic": ["string"] }},
  "technology": {{ "innovations": ["string"], "dailyLife": ["string"] }},
  "dailyLife": {{ "morning": "string", "afternoon": "string", "evening": "string", "lifestyle": ["string"] }},
  "memories": [{{ "name": "string", "city": "string", "memory": "string about {year}" }}]
}}"#
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Cut `context` to at most `limit` characters, marking the cut
pub fn truncate_context(context: &str, limit: usize) -> String {
    match context.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{TRUNCATION_MARKER}", &context[..byte_index]),
        None => context.to_string(),
    }
}
