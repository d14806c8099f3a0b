use alloc::collections::VecDeque;

use crate::*;

impl Board {
    /// Positions around `coords` at Chebyshev distance 1, clipped to the board.
    pub fn neighbors(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.iter_neighbors(coords))
    }

    pub fn surrounding_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    /// Opens `coords` and cascades into its neighbors.
    ///
    /// A cell cascades when it has no adjacent mines (flood fill), or when the
    /// flags around it account for its adjacent mines (chord, typically on an
    /// already opened number). Flagged cells are never opened, so a wrong flag
    /// can both block a cascade and make a chord open a mine.
    ///
    /// The win condition is checked after every opened cell, so opening any
    /// cell of a fully covered board with exact flags wins it. Once the round
    /// is lost or won this is a no-op.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.is_finished() || self.is_flagged(coords) {
            return Ok(OpenOutcome::NoChange);
        }

        let mut to_visit = VecDeque::from([coords]);
        let mut cascaded: CellCount = 0;

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.is_flagged(visit_coords) {
                continue;
            }
            if visit_coords != coords && self.is_opened(visit_coords) {
                continue;
            }

            self.mark_opened(visit_coords);
            if visit_coords != coords {
                cascaded += 1;
            }

            if self.has_mine_at(visit_coords) {
                log::debug!("Opened mine at {visit_coords:?}, game lost");
                self.lost = true;
                return Ok(OpenOutcome::HitMine);
            }

            if self.is_cleared() {
                log::debug!("Board cleared at {visit_coords:?}, game won");
                self.won = true;
                return Ok(OpenOutcome::Won);
            }

            if self.can_expand(visit_coords) {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.is_opened(pos)),
                );
            }
        }

        if cascaded > 0 {
            log::debug!("Opening {coords:?} cascaded into {cascaded} cells");
        }
        Ok(OpenOutcome::Opened)
    }

    /// Flips the flag on a cell that is not opened.
    ///
    /// Unlike [`Board::open`] this still works after the round has ended.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.is_opened(coords) {
            return Ok(FlagOutcome::NoChange);
        }

        let has_mine = self.has_mine_at(coords);
        let flag = &mut self.flagged[coords.to_nd_index()];
        *flag = !*flag;

        Ok(if *flag {
            self.flagged_count += 1;
            if has_mine {
                self.flagged_mine_count += 1;
            }
            FlagOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            if has_mine {
                self.flagged_mine_count -= 1;
            }
            FlagOutcome::Unflagged
        })
    }

    fn mark_opened(&mut self, coords: Coord2) {
        let opened = &mut self.opened[coords.to_nd_index()];
        if !*opened {
            *opened = true;
            self.opened_count += 1;
        }
    }

    /// Flags match the mines exactly and every cell is either opened or flagged.
    fn is_cleared(&self) -> bool {
        let mine_count = self.mine_layout.mine_count();
        let flags_match =
            self.flagged_count.0 == mine_count && self.flagged_mine_count.0 == mine_count;
        let covered = self.opened_count + self.flagged_count;

        flags_match && covered.0 == self.mine_layout.total_cells()
    }

    fn can_expand(&self, coords: Coord2) -> bool {
        let mut adjacent_mines = 0u8;
        let mut adjacent_flags = 0u8;
        for pos in self.mine_layout.iter_neighbors(coords) {
            if self.has_mine_at(pos) {
                adjacent_mines += 1;
            }
            if self.is_flagged(pos) {
                adjacent_flags += 1;
            }
        }
        adjacent_mines == 0 || adjacent_mines == adjacent_flags
    }
}
