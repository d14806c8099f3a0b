use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a presentation layer shows for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    /// An opened mine, only seen on a lost board.
    Mine,
    /// An opened safe cell with its adjacent mine count; zero renders blank.
    Count(u8),
}

impl Board {
    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.cell_view_unchecked(coords))
    }

    /// `coords` must be in bounds.
    fn cell_view_unchecked(&self, coords: Coord2) -> CellView {
        if self.is_flagged(coords) {
            CellView::Flagged
        } else if !self.is_opened(coords) {
            CellView::Hidden
        } else if self.has_mine_at(coords) {
            CellView::Mine
        } else {
            CellView::Count(self.mine_layout.adjacent_mine_count(coords))
        }
    }
}

/// Read-only copy of everything a presentation layer needs after a move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub mines: CellCount,
    pub mines_left: i32,
    pub status: GameStatus,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            board.cell_view_unchecked((x as Coord, y as Coord))
        });

        Self {
            size,
            mines: board.mine_count(),
            mines_left: board.mines_left(),
            status: board.state(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        (0..self.size.1).map(move |y| (0..self.size.0).map(move |x| self.cell_at((x, y))))
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn cell_view_covers_every_state() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);
        board.open((1, 0)).unwrap();
        board.open((2, 0)).unwrap();
        board.toggle_flag((0, 2)).unwrap();

        assert_eq!(board.cell_view((1, 0)), Ok(CellView::Count(1)));
        assert_eq!(board.cell_view((2, 0)), Ok(CellView::Count(0)));
        assert_eq!(board.cell_view((0, 2)), Ok(CellView::Flagged));
        assert_eq!(board.cell_view((0, 0)), Ok(CellView::Hidden));
        assert_eq!(board.cell_view((3, 0)), Err(GameError::OutOfBounds));

        board.open((0, 0)).unwrap();
        assert_eq!(board.cell_view((0, 0)), Ok(CellView::Mine));
    }

    #[test]
    fn snapshot_maps_board_state() {
        let mut board = board((2, 2), &[(0, 0)]);
        board.open((1, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();

        let snapshot = BoardSnapshot::from(&board);

        assert_eq!(snapshot.size, (2, 2));
        assert_eq!(snapshot.mines, 1);
        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.status, GameStatus::Active);
        assert_eq!(snapshot.cell_at((1, 1)), CellView::Count(1));
        assert_eq!(snapshot.cell_at((0, 0)), CellView::Flagged);
        assert_eq!(snapshot.cell_at((1, 0)), CellView::Hidden);
    }

    #[test]
    fn snapshot_agrees_with_cell_view_everywhere() {
        let mut board = board((5, 4), &[(0, 0), (4, 3), (2, 2)]);
        board.toggle_flag((0, 0)).unwrap();
        assert_eq!(board.open((4, 0)), Ok(OpenOutcome::Opened));
        assert_eq!(board.open((2, 2)), Ok(OpenOutcome::HitMine));

        let snapshot = BoardSnapshot::from_board(&board);

        assert_eq!(snapshot.status, GameStatus::Lost);
        for x in 0..5 {
            for y in 0..4 {
                assert_eq!(Ok(snapshot.cell_at((x, y))), board.cell_view((x, y)));
            }
        }
        assert_eq!(snapshot.cell_at((2, 2)), CellView::Mine);
        assert_eq!(snapshot.cell_at((0, 0)), CellView::Flagged);
        assert_eq!(snapshot.cell_at((4, 3)), CellView::Hidden);
    }

    #[test]
    fn rows_iterate_top_to_bottom() {
        let mut board = board((3, 2), &[(2, 1)]);
        board.open((0, 0)).unwrap();

        let rows: Vec<Vec<_>> = BoardSnapshot::from_board(&board)
            .iter_rows()
            .map(|row| row.collect())
            .collect();

        use CellView::*;
        assert_eq!(rows, [[Count(0), Count(1), Hidden], [Count(0), Count(1), Hidden]]);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut board = board((2, 1), &[(1, 0)]);
        board.open((1, 0)).unwrap();

        let snapshot = BoardSnapshot::from_board(&board);
        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(json.contains("\"Lost\""));
        assert!(json.contains("\"Mine\""));
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
