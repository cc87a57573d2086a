use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use wordwhiz_engine::{Difficulty, EngineConfig, GameEngine, GameSession, RoundSummary};

#[derive(Parser)]
#[command(name = "wordwhiz-cli")]
#[command(about = "WordWhiz word game CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Round history database path
    #[arg(short, long, default_value = "wordwhiz.db")]
    db: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play guessing rounds
    Play {
        /// Restrict rounds to one difficulty (easy, medium, hard)
        #[arg(short = 'l', long)]
        difficulty: Option<String>,

        /// Remote generation service URL
        #[arg(short, long)]
        generator_url: Option<String>,
    },

    /// Show round history statistics
    Stats,

    /// List the word pool
    Words {
        /// Only words of this difficulty
        #[arg(short = 'l', long)]
        difficulty: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            generator_url,
        } => {
            let difficulty = parse_difficulty(difficulty)?;
            let config = EngineConfig {
                generator_url,
                db_path: Some(cli.db),
                ..EngineConfig::default()
            };
            let engine = GameEngine::new(config).await?;

            play(&engine, difficulty).await?;
        }

        Commands::Stats => {
            let config = EngineConfig {
                db_path: Some(cli.db),
                ..EngineConfig::default()
            };
            let engine = GameEngine::new(config).await?;

            match engine.history_stats().await? {
                Some(stats) if stats.rounds > 0 => {
                    println!("📊 Round history:");
                    println!("   Rounds played: {}", stats.rounds);
                    println!("   Words solved:  {}", stats.solved);
                    println!("   Solve rate:    {:.0}%", stats.solve_rate * 100.0);
                    println!("   Total points:  {}", stats.total_points);
                    println!("   Best streak:   {}", stats.best_streak);
                }
                _ => println!("📊 No rounds recorded yet. Play some!"),
            }
        }

        Commands::Words { difficulty } => {
            let difficulty = parse_difficulty(difficulty)?;
            let engine = GameEngine::new(EngineConfig::default()).await?;
            let words = engine.words().filter(difficulty);

            println!("📚 {} words:", words.len());
            for word in words {
                println!(
                    "   {:>3}. {:<14} {:<6} {}",
                    word.id,
                    word.word,
                    word.difficulty,
                    word.definition
                );
            }
        }
    }

    Ok(())
}

fn parse_difficulty(arg: Option<String>) -> anyhow::Result<Option<Difficulty>> {
    arg.map(|s| Difficulty::from_str(&s).map_err(anyhow::Error::msg))
        .transpose()
}

async fn play(engine: &GameEngine, difficulty: Option<Difficulty>) -> anyhow::Result<()> {
    let mut session = GameSession::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("🎮 WordWhiz! Guess the word from its definition.");
    println!("   Commands: hint, giveup, quit\n");

    'game: loop {
        let word = engine.new_round(difficulty)?;
        session.start_round(word.clone());

        let intro = engine.description(&word).await?;
        println!("🎯 {}", intro);
        println!("📖 Definition: {}", word.definition);

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break 'game;
            };
            let input = line?.trim().to_string();

            match input.as_str() {
                "quit" | "exit" => break 'game,

                "hint" => {
                    session.record_hint();
                    let hint = engine.hint(&word).await?;
                    println!("💡 {}", hint);
                }

                "giveup" => {
                    if let Some(summary) = session.give_up() {
                        engine.record_round(&summary).await?;
                    }
                    println!("🏳️ The word was \"{}\".", word.word);
                    break;
                }

                _ => {
                    let result = engine.check_guess(Some(&input), &word);
                    println!("{} {}", if result.is_correct { "✅" } else { "💬" }, result.message);

                    if let Some(summary) = session.apply_guess(&result) {
                        engine.record_round(&summary).await?;
                        report_round(&summary, &session);
                        break;
                    }
                }
            }
        }
    }

    // Settle an unfinished round before the final tally
    if let Some(summary) = session.give_up() {
        engine.record_round(&summary).await?;
    }

    println!("\n👋 Thanks for playing!");
    println!("   Score: {}  Solved: {}/{}  Best streak: {}",
        session.score(),
        session.words_solved(),
        session.rounds_played(),
        session.best_streak()
    );

    Ok(())
}

fn report_round(summary: &RoundSummary, session: &GameSession) {
    println!(
        "🎉 +{} points in {} {} (score {}, streak {})",
        summary.points,
        summary.attempts,
        if summary.attempts == 1 { "guess" } else { "guesses" },
        session.score(),
        session.streak()
    );
}
