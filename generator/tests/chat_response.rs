//! Freeform chat through the full model chain

mod fixtures;

use std::time::Duration;

use fixtures::*;
use generator::{
    Generator, GeneratorError, MockContextSource, MockTextBackend, APOLOGY_MESSAGE,
};
use mockall::predicate::eq;
use shared::{DecadeContext, Story};

#[tokio::test]
async fn test_answer_from_first_model() {
    let mut backend = MockTextBackend::new();
    backend
        .expect_generate_content()
        .withf(|model, prompt| {
            model == "flash"
                && prompt.contains("living in the 1970s")
                && prompt.ends_with("as someone from the 1970s India.")
        })
        .times(1)
        .returning(|_, _| Ok("Arre, a cinema ticket cost just two rupees!".to_string()));

    let generator = Generator::new(backend, config_with_models(&["flash", "pro"])).unwrap();
    let answer = generator
        .generate_chat_response(&DecadeContext::fallback(1970), "How much was a ticket?", 1970)
        .await
        .unwrap();

    assert_eq!(answer, "Arre, a cinema ticket cost just two rupees!");
}

#[tokio::test(start_paused = true)]
async fn test_rate_limits_backoff_before_second_model_is_needed() {
    let backend = ScriptedBackend::new()
        .script(
            "flash",
            vec![
                Step::RateLimited,
                Step::RateLimited,
                Step::RateLimited,
                Step::Text("We listened to Vividh Bharati".to_string()),
            ],
        )
        .script("pro", vec![Step::Text("unused".to_string())]);
    let log = backend.call_log();
    let generator = Generator::new(backend, config_with_models(&["flash", "pro"])).unwrap();
    let start = tokio::time::Instant::now();

    let answer = generator
        .generate_chat_response(&DecadeContext::fallback(1960), "What did you listen to?", 1960)
        .await
        .unwrap();

    assert_eq!(answer, "We listened to Vividh Bharati");
    assert_eq!(calls_to(&log, "flash"), 4);
    assert_eq!(calls_to(&log, "pro"), 0);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(14));
    assert!(elapsed < Duration::from_millis(14_100));
}

#[tokio::test(start_paused = true)]
async fn test_all_models_failing_returns_apology() {
    let backend = ScriptedBackend::new()
        .script("flash", vec![Step::Hang])
        .script("pro", vec![Step::Fail("503 Service Unavailable".to_string())]);
    let generator = Generator::new(backend, config_with_models(&["flash", "pro"])).unwrap();
    let start = tokio::time::Instant::now();

    let answer = generator
        .generate_chat_response(&DecadeContext::fallback(1990), "Any news?", 1990)
        .await
        .unwrap();

    assert_eq!(answer, APOLOGY_MESSAGE);
    assert!(start.elapsed() >= Duration::from_secs(30));
    assert!(start.elapsed() < Duration::from_secs(31));
}

#[tokio::test]
async fn test_blank_reply_falls_through_to_next_model() {
    let backend = ScriptedBackend::new()
        .script("flash", vec![Step::Text("   ".to_string())])
        .script("pro", vec![Step::Text("Namaste!".to_string())]);
    let generator = Generator::new(backend, config_with_models(&["flash", "pro"])).unwrap();

    let answer = generator
        .generate_chat_response(&DecadeContext::default(), "Hello?", 1980)
        .await
        .unwrap();
    assert_eq!(answer, "Namaste!");
}

#[tokio::test]
async fn test_blank_question_is_rejected() {
    let mut backend = MockTextBackend::new();
    backend.expect_generate_content().never();
    let generator = Generator::new(backend, config_with_models(&["flash"])).unwrap();

    let result = generator
        .generate_chat_response(&DecadeContext::default(), " \n ", 1980)
        .await;
    assert!(matches!(result, Err(GeneratorError::InvalidRequest { .. })));
}

#[tokio::test]
async fn test_answer_question_fetches_decade_context() {
    let mut source = MockContextSource::new();
    source
        .expect_context_for()
        .with(eq(1950))
        .times(1)
        .returning(DecadeContext::fallback);

    let mut backend = MockTextBackend::new();
    backend
        .expect_generate_content()
        .withf(|_, prompt| prompt.contains("Life in the 1950s"))
        .times(1)
        .returning(|_, _| Ok("Life was simple.".to_string()));

    let generator = Generator::new(backend, config_with_models(&["flash"])).unwrap();
    let answer = generator
        .answer_question(&source, "How was life?", 1950)
        .await
        .unwrap();

    tokio_test::assert_ok!(generator.config().validate());
    assert_eq!(answer, "Life was simple.");
}

#[tokio::test]
async fn test_large_context_is_truncated_in_the_prompt() {
    let context = DecadeContext {
        stories: vec![Story {
            title: "Monsoon".to_string(),
            text: "z".repeat(6000),
        }],
        ..DecadeContext::default()
    };
    let serialized = serde_json::to_string_pretty(&context).unwrap();
    assert!(serialized.chars().count() > 5000);

    let kept: String = serialized.chars().take(2000).collect();
    let embedded = format!("{kept}...");
    let one_more: String = serialized.chars().take(2001).collect();

    let mut backend = MockTextBackend::new();
    backend
        .expect_generate_content()
        .withf(move |_, prompt| prompt.contains(&embedded) && !prompt.contains(&one_more))
        .times(1)
        .returning(|_, _| Ok("It rained for weeks.".to_string()));

    let generator = Generator::new(backend, config_with_models(&["flash"])).unwrap();
    let answer = generator
        .generate_chat_response(&context, "How were the rains?", 1970)
        .await
        .unwrap();

    assert_eq!(answer, "It rained for weeks.");
}
