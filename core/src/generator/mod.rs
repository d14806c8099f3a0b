use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// How a random generator turns the requested mine count into mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Exactly the requested number of distinct mines.
    #[default]
    Exact,
    /// One uniform draw per requested mine; repeated draws collapse into a
    /// single mine, so the board may hold fewer than requested.
    WithReplacement,
}
