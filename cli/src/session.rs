use sweeper_core::*;

/// The running game: owns the current board and how new rounds are dealt.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    placement: Placement,
    seed: u64,
    board: Board,
}

impl Session {
    pub fn new(config: GameConfig, placement: Placement, seed: u64) -> Self {
        let board = deal(config, placement, seed);
        Self {
            config,
            placement,
            seed,
            board,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(&self.board)
    }

    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let outcome = self.board.open(coords)?;
        log::debug!("open {coords:?}: {outcome:?}");
        if outcome.is_finished() {
            log::info!(
                "Round over ({:?}) after opening {} cells",
                self.board.state(),
                self.board.opened_count()
            );
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let outcome = self.board.toggle_flag(coords)?;
        log::debug!("flag {coords:?}: {outcome:?}");
        Ok(outcome)
    }

    /// Replaces the board with a freshly dealt one.
    pub fn restart(&mut self) {
        // one 64-bit LCG step, so a seeded run replays the same rounds
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.board = deal(self.config, self.placement, self.seed);
    }
}

fn deal(config: GameConfig, placement: Placement, seed: u64) -> Board {
    log::debug!("Dealing {config:?} with seed {seed} ({placement:?})");
    let board = Board::random(config, RandomMineGenerator::new(seed, placement));
    log::info!(
        "New round: {}x{} with {} mines",
        board.width(),
        board.height(),
        board.mine_count()
    );
    board
}
