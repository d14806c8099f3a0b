use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// State of one round: the mines, what the player has opened and flagged, and
/// whether the round has ended.
///
/// The board only changes through [`Board::open`] and [`Board::toggle_flag`].
/// Opened and flagged cells never overlap, since opening is blocked on flags
/// and flagging is blocked on opened cells.
///
/// Serializable for hosts that snapshot it, but only built through
/// [`Board::new`], so the counters always agree with the masks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    pub(crate) mine_layout: MineLayout,
    pub(crate) opened: Array2<bool>,
    pub(crate) flagged: Array2<bool>,
    pub(crate) opened_count: Saturating<CellCount>,
    pub(crate) flagged_count: Saturating<CellCount>,
    /// Flags that sit on a mine, used for the exact-match win check.
    pub(crate) flagged_mine_count: Saturating<CellCount>,
    pub(crate) lost: bool,
    pub(crate) won: bool,
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            opened: Array2::default(size.to_nd_index()),
            flagged: Array2::default(size.to_nd_index()),
            opened_count: Saturating(0),
            flagged_count: Saturating(0),
            flagged_mine_count: Saturating(0),
            lost: false,
            won: false,
        }
    }

    /// Starts a new round with mines placed by `generator`.
    pub fn random(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_layout.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn is_opened(&self, coords: Coord2) -> bool {
        self.opened[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged[coords.to_nd_index()]
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines not yet covered by a flag, as shown on a counter. Negative when
    /// the player has placed more flags than there are mines.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_count()) - i32::from(self.flagged_count.0)
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn state(&self) -> GameStatus {
        if self.lost {
            GameStatus::Lost
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Active
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn opened_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_set(&self.opened)
    }

    pub fn flagged_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_set(&self.flagged)
    }
}

fn iter_set(mask: &Array2<bool>) -> impl Iterator<Item = Coord2> + '_ {
    mask.indexed_iter()
        .filter(|&(_, &is_set)| is_set)
        .map(|((x, y), _)| (x as Coord, y as Coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_active_and_empty() {
        let layout = MineLayout::from_mine_coords((4, 3), &[(1, 2)]).unwrap();
        let board = Board::new(layout);

        assert_eq!(board.size(), (4, 3));
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.mine_count(), 1);
        assert!(board.has_mine_at((1, 2)));
        assert_eq!(board.state(), GameStatus::Active);
        assert_eq!(board.opened_positions().count(), 0);
        assert_eq!(board.flagged_positions().count(), 0);
        assert_eq!(board.mines_left(), 1);
    }
}
