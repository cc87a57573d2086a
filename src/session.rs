use crate::core::{GuessResult, TargetWord};

/// Points deducted for each hint taken during a round.
const HINT_PENALTY: i64 = 5;

/// A solved round is never worth less than this.
const MIN_POINTS: i64 = 5;

/// How one finished round went.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub word: TargetWord,
    pub attempts: u32,
    pub hints: u32,
    pub solved: bool,
    pub points: i64,
}

#[derive(Debug)]
struct RoundState {
    word: TargetWord,
    attempts: u32,
    hints: u32,
}

/// Running totals for one player.
///
/// Pure arithmetic over [`GuessResult`] values; the session never
/// second-guesses the validator.
#[derive(Debug, Default)]
pub struct GameSession {
    score: i64,
    streak: u32,
    best_streak: u32,
    rounds_played: u32,
    words_solved: u32,
    current: Option<RoundState>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a round for `word`. An unfinished round counts as abandoned.
    pub fn start_round(&mut self, word: TargetWord) {
        self.finish(false);
        self.current = Some(RoundState {
            word,
            attempts: 0,
            hints: 0,
        });
    }

    /// Note a hint taken this round.
    pub fn record_hint(&mut self) {
        if let Some(round) = self.current.as_mut() {
            round.hints += 1;
        }
    }

    /// Feed one validated guess into the session.
    ///
    /// Returns the round summary when the guess closes the round, `None`
    /// while it stays open. Calling without an active round is a no-op.
    pub fn apply_guess(&mut self, result: &GuessResult) -> Option<RoundSummary> {
        let round = self.current.as_mut()?;
        round.attempts += 1;

        if result.is_correct {
            self.finish(true)
        } else {
            None
        }
    }

    /// Forfeit the active round. Streak resets, no points.
    pub fn give_up(&mut self) -> Option<RoundSummary> {
        self.finish(false)
    }

    /// Close the round in flight, if any, and settle the totals.
    fn finish(&mut self, solved: bool) -> Option<RoundSummary> {
        let round = self.current.take()?;
        self.rounds_played += 1;

        let points = if solved {
            let base = round.word.difficulty.base_points();
            (base - HINT_PENALTY * i64::from(round.hints)).max(MIN_POINTS)
        } else {
            0
        };

        if solved {
            self.score += points;
            self.words_solved += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        Some(RoundSummary {
            word: round.word,
            attempts: round.attempts,
            hints: round.hints,
            solved,
            points,
        })
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn words_solved(&self) -> u32 {
        self.words_solved
    }

    /// The word being guessed right now, if a round is open.
    pub fn current_word(&self) -> Option<&TargetWord> {
        self.current.as_ref().map(|round| &round.word)
    }

    pub fn attempts_this_round(&self) -> u32 {
        self.current.as_ref().map_or(0, |round| round.attempts)
    }

    pub fn hints_this_round(&self) -> u32 {
        self.current.as_ref().map_or(0, |round| round.hints)
    }
}
