use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::core::Difficulty;
use crate::error::Result;
use crate::session::RoundSummary;

/// One finished round, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub word_id: u32,
    pub word: String,
    pub difficulty: Difficulty,
    pub attempts: u32,
    pub hints: u32,
    pub solved: bool,
    pub points: i64,
    pub finished_at: DateTime<Utc>,
}

impl RoundRecord {
    /// Build a record from a session round summary, stamped now.
    pub fn from_summary(summary: &RoundSummary) -> Self {
        Self {
            word_id: summary.word.id,
            word: summary.word.word.clone(),
            difficulty: summary.word.difficulty,
            attempts: summary.attempts,
            hints: summary.hints,
            solved: summary.solved,
            points: summary.points,
            finished_at: Utc::now(),
        }
    }
}

/// Aggregates over the whole round history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoreStats {
    pub rounds: u64,
    pub solved: u64,
    pub solve_rate: f64,
    pub total_points: i64,
    pub best_streak: u32,
}

/// SQLite-backed round history.
///
/// ```sql
/// CREATE TABLE round_history (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     word_id INTEGER NOT NULL,
///     word TEXT NOT NULL,
///     difficulty TEXT NOT NULL,
///     attempts INTEGER NOT NULL,
///     hints INTEGER NOT NULL,
///     solved INTEGER NOT NULL,
///     points INTEGER NOT NULL,
///     finished_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
pub struct RoundStore {
    conn: Arc<Mutex<Connection>>,
}

impl RoundStore {
    /// Open (or create) the history database at `db_path`.
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS round_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word_id INTEGER NOT NULL,
                word TEXT NOT NULL,
                difficulty TEXT NOT NULL,
                attempts INTEGER NOT NULL,
                hints INTEGER NOT NULL,
                solved INTEGER NOT NULL,
                points INTEGER NOT NULL,
                finished_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_finished_at ON round_history(finished_at)",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Append one finished round.
    pub async fn record(&self, record: &RoundRecord) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO round_history (word_id, word, difficulty, attempts, hints, solved, points, finished_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.word_id,
                record.word,
                record.difficulty.as_str(),
                record.attempts,
                record.hints,
                record.solved,
                record.points,
                record.finished_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    /// The most recent rounds, newest first.
    pub async fn recent(&self, limit: usize) -> Result<Vec<RoundRecord>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT word_id, word, difficulty, attempts, hints, solved, points, finished_at
             FROM round_history
             ORDER BY id DESC
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            let difficulty_text: String = row.get(2)?;
            let difficulty = Difficulty::from_str(&difficulty_text)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(e.into()))?;

            // Lenient timestamp parse; a bad row should not sink the query
            let finished_at = DateTime::parse_from_rfc3339(&row.get::<_, String>(7)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());

            Ok(RoundRecord {
                word_id: row.get(0)?,
                word: row.get(1)?,
                difficulty,
                attempts: row.get(3)?,
                hints: row.get(4)?,
                solved: row.get(5)?,
                points: row.get(6)?,
                finished_at,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }

    /// Aggregate statistics over the whole history.
    pub async fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock().unwrap();

        let rounds: u64 = conn.query_row("SELECT COUNT(*) FROM round_history", [], |row| {
            row.get(0)
        })?;

        let solved: u64 = conn.query_row(
            "SELECT COALESCE(SUM(solved), 0) FROM round_history",
            [],
            |row| row.get(0),
        )?;

        let total_points: i64 = conn.query_row(
            "SELECT COALESCE(SUM(points), 0) FROM round_history",
            [],
            |row| row.get(0),
        )?;

        // Longest run of consecutive solved rounds, in play order
        let mut stmt = conn.prepare("SELECT solved FROM round_history ORDER BY id")?;
        let flags = stmt.query_map([], |row| row.get::<_, bool>(0))?;

        let mut best_streak = 0u32;
        let mut run = 0u32;
        for flag in flags {
            if flag? {
                run += 1;
                best_streak = best_streak.max(run);
            } else {
                run = 0;
            }
        }

        let solve_rate = if rounds > 0 {
            solved as f64 / rounds as f64
        } else {
            0.0
        };

        Ok(StoreStats {
            rounds,
            solved,
            solve_rate,
            total_points,
            best_streak,
        })
    }

    /// Wipe the history, returning how many rows were deleted.
    pub async fn clear(&self) -> Result<u64> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute("DELETE FROM round_history", [])?;
        Ok(deleted as u64)
    }
}
