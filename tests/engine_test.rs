use std::sync::Arc;
use wordwhiz_engine::generation::TemplateGenerator;
use wordwhiz_engine::{
    Difficulty, EngineConfig, GameEngine, GameSession, TextCache, WordStore,
};

fn memory_config() -> EngineConfig {
    EngineConfig {
        db_path: Some(":memory:".to_string()),
        ..EngineConfig::default()
    }
}

#[tokio::test]
async fn test_full_round_flow() {
    let engine = GameEngine::new(memory_config()).await.unwrap();
    let mut session = GameSession::new();

    let word = engine.new_round(Some(Difficulty::Easy)).unwrap();
    session.start_round(word.clone());

    let intro = engine.description(&word).await.unwrap();
    assert!(intro.contains("-letter"));

    // A miss keeps the round open
    let miss = engine.check_guess(Some("definitely not it 123x"), &word);
    assert!(!miss.is_correct);
    assert!(session.apply_guess(&miss).is_none());

    // Take a hint, then solve
    session.record_hint();
    let hint = engine.hint(&word).await.unwrap();
    assert!(!hint.to_lowercase().contains(&word.word));

    let solve = engine.check_guess(Some(&word.word), &word);
    assert!(solve.is_correct);

    let summary = session.apply_guess(&solve).unwrap();
    assert!(summary.solved);
    assert_eq!(summary.attempts, 2);
    assert_eq!(summary.hints, 1);
    assert_eq!(summary.points, 5); // easy base 10, minus one hint

    engine.record_round(&summary).await.unwrap();

    let stats = engine.history_stats().await.unwrap().unwrap();
    assert_eq!(stats.rounds, 1);
    assert_eq!(stats.solved, 1);
    assert_eq!(stats.total_points, 5);
}

#[tokio::test]
async fn test_typo_still_wins_the_round() {
    let engine = GameEngine::new(memory_config()).await.unwrap();
    let mut session = GameSession::new();

    let word = engine.new_round(Some(Difficulty::Hard)).unwrap();
    session.start_round(word.clone());

    // Hard words are long enough to tolerate a dropped letter
    let mut typo = word.word.clone();
    typo.pop();

    let result = engine.check_guess(Some(&typo), &word);
    assert!(result.is_correct, "{} rejected {}", word.word, typo);

    let summary = session.apply_guess(&result).unwrap();
    assert!(summary.solved);
    assert_eq!(summary.points, 30);
}

#[tokio::test]
async fn test_give_up_lands_in_the_history() {
    let engine = GameEngine::new(memory_config()).await.unwrap();
    let mut session = GameSession::new();

    let word = engine.new_round(None).unwrap();
    session.start_round(word.clone());

    let summary = session.give_up().unwrap();
    engine.record_round(&summary).await.unwrap();

    let stats = engine.history_stats().await.unwrap().unwrap();
    assert_eq!(stats.rounds, 1);
    assert_eq!(stats.solved, 0);
    assert_eq!(stats.solve_rate, 0.0);

    let recent = engine.recent_rounds(1).await.unwrap();
    assert_eq!(recent[0].word, word.word);
    assert!(!recent[0].solved);
}

#[tokio::test]
async fn test_hints_are_cached_between_requests() {
    let engine = GameEngine::with_parts(
        WordStore::new(),
        Arc::new(TemplateGenerator::new()),
        Arc::new(TextCache::new()),
        None,
    );
    let word = engine.word(44).unwrap().clone();

    let first = engine.hint(&word).await.unwrap();
    let second = engine.hint(&word).await.unwrap();

    assert_eq!(first, second);

    let cache = engine.cache_stats();
    assert_eq!(cache.entries, 1);
    assert_eq!(cache.hits, 1);
    assert_eq!(cache.misses, 1);
}

#[tokio::test]
async fn test_streaks_accumulate_across_rounds() {
    let engine = GameEngine::new(memory_config()).await.unwrap();
    let mut session = GameSession::new();

    for _ in 0..3 {
        let word = engine.new_round(Some(Difficulty::Medium)).unwrap();
        session.start_round(word.clone());

        let result = engine.check_guess(Some(&word.word.to_uppercase()), &word);
        let summary = session.apply_guess(&result).unwrap();
        engine.record_round(&summary).await.unwrap();
    }

    assert_eq!(session.score(), 60);
    assert_eq!(session.best_streak(), 3);

    let stats = engine.history_stats().await.unwrap().unwrap();
    assert_eq!(stats.rounds, 3);
    assert_eq!(stats.best_streak, 3);
    assert_eq!(stats.total_points, 60);
}
