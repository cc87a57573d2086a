pub mod guess_result;
pub mod word;

pub use guess_result::{GuessResult, HintLevel};
pub use word::{Difficulty, TargetWord};
