//! Model reply fixtures

#![allow(dead_code)]

use generator::GeneratorConfig;
use serde_json::json;

/// Config with the given models and default timings
pub fn config_with_models(models: &[&str]) -> GeneratorConfig {
    GeneratorConfig::default().with_models(models.iter().map(|model| model.to_string()).collect())
}

/// Year-specific reply that passes validation
pub fn specific_reply(year: u16) -> String {
    json!({
        "introduction": format!("India in {year} was buzzing with change."),
        "music": {
            "hits": [
                { "title": "Dum Maro Dum", "description": "Chartbuster from the film soundtrack" },
                { "title": "Mere Sapno Ki Rani", "description": "Sung everywhere that monsoon" },
                { "title": "Chura Liya Hai", "description": "A romantic favourite" }
            ],
            "trends": ["Disco beats reached film music"]
        },
        "majorEvents": [
            { "date": format!("March {year}"), "title": "General election", "description": "Votes were counted" },
            { "date": format!("June {year}"), "title": "Monsoon arrives", "description": "Early rains" }
        ],
        "fashion": { "mens": ["Bell bottoms"], "womens": ["Chiffon sarees"], "accessories": ["Big sunglasses"] },
        "ideologies": { "political": ["Debate"], "social": ["Change"], "economic": ["Saving"] },
        "technology": { "innovations": ["Colour TV trials"], "dailyLife": ["Transistor radios"] },
        "dailyLife": { "morning": "Tea", "afternoon": "Work", "evening": "Radio", "lifestyle": ["Cinema"] },
        "memories": [{ "name": "Meena", "city": "Pune", "memory": format!("My first film in {year}") }]
    })
    .to_string()
}

/// Fenced variant of [`specific_reply`], as models often answer
pub fn fenced_reply(year: u16) -> String {
    format!("```json\n{}\n```", specific_reply(year))
}

/// Generic decade-level reply that must be rejected
pub fn vague_reply() -> String {
    json!({
        "introduction": "Throughout the decade, people enjoyed life. During this era, in those days, the decade saw change.",
        "music": { "hits": [{ "title": "Some song", "description": "Popular during this period" }], "trends": [] },
        "majorEvents": [{ "date": "Sometime", "title": "Something", "description": "It happened" }]
    })
    .to_string()
}
