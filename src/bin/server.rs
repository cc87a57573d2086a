use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordwhiz_engine::{
    Difficulty, EngineConfig, GameEngine, GuessResult, StoreStats, WordGameError,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<GameEngine>,
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    word_id: u32,
    guess: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordParams {
    difficulty: Option<Difficulty>,
    #[serde(default)]
    reveal: bool,
}

#[derive(Debug, Serialize)]
struct WordResponse {
    id: u32,
    definition: String,
    difficulty: Difficulty,
    letters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<String>,
}

#[derive(Debug, Serialize)]
struct HintResponse {
    word_id: u32,
    hint: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    generator: String,
    cache: CacheStatsDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<StoreStats>,
}

#[derive(Debug, Serialize)]
struct CacheStatsDto {
    entries: usize,
    hits: u64,
    misses: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordwhiz_server=debug,wordwhiz_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| "wordwhiz.db".to_string());
    let generator_url = std::env::var("GENERATOR_URL").ok();
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting WordWhiz Server");
    tracing::info!("📦 Database: {}", db_path);
    tracing::info!("🔌 Port: {}", port);

    let config = EngineConfig {
        generator_url,
        db_path: Some(db_path),
        ..EngineConfig::default()
    };
    let engine = GameEngine::new(config).await?;

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/word", get(word_handler))
        .route("/v1/guess", post(guess_handler))
        .route("/v1/hint/:id", get(hint_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: wordwhiz_engine::VERSION.to_string(),
    })
}

async fn word_handler(
    State(state): State<AppState>,
    Query(params): Query<WordParams>,
) -> Result<Json<WordResponse>, AppError> {
    let word = state.engine.new_round(params.difficulty)?;

    tracing::debug!("Dealt word {} ({})", word.id, word.difficulty);

    Ok(Json(WordResponse {
        id: word.id,
        definition: word.definition.clone(),
        difficulty: word.difficulty,
        letters: word.letter_count(),
        word: params.reveal.then(|| word.word.clone()),
    }))
}

async fn guess_handler(
    State(state): State<AppState>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<GuessResult>, AppError> {
    let target = state.engine.word(req.word_id)?.clone();
    let result = state.engine.check_guess(req.guess.as_deref(), &target);

    tracing::info!(
        "{} word {} ← {:?}",
        if result.is_correct { "✅" } else { "❌" },
        req.word_id,
        req.guess
    );

    Ok(Json(result))
}

async fn hint_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<HintResponse>, AppError> {
    let target = state.engine.word(id)?.clone();
    let hint = state.engine.hint(&target).await?;

    Ok(Json(HintResponse { word_id: id, hint }))
}

async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let cache = state.engine.cache_stats();
    let history = state.engine.history_stats().await?;

    Ok(Json(StatsResponse {
        generator: state.engine.generator_name().to_string(),
        cache: CacheStatsDto {
            entries: cache.entries,
            hits: cache.hits,
            misses: cache.misses,
        },
        history,
    }))
}

// Error handling
struct AppError(WordGameError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            WordGameError::UnknownWord(id) => {
                (StatusCode::NOT_FOUND, format!("No word with id {}", id))
            }
            WordGameError::EmptyWordSet(filter) => (
                StatusCode::NOT_FOUND,
                format!("No words available for: {}", filter),
            ),
            WordGameError::Generator(message) => {
                (StatusCode::BAD_GATEWAY, format!("Generator error: {}", message))
            }
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<WordGameError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
