use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random mine placement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let config = clamp_config(config);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());

        match self.placement {
            Placement::Exact => {
                // selection sampling: each cell is mined with probability
                // mines_left / cells_left
                let mut mines_left = u32::from(config.mines);
                let mut cells_left = u32::from(config.total_cells());
                for tile in mines.iter_mut() {
                    if rng.random_ratio(mines_left, cells_left) {
                        *tile = true;
                        mines_left -= 1;
                    }
                    cells_left -= 1;
                }
            }
            Placement::WithReplacement => {
                let (size_x, size_y) = config.size;
                for _ in 0..config.mines {
                    let coords = (rng.random_range(0..size_x), rng.random_range(0..size_y));
                    mines[coords.to_nd_index()] = true;
                }
            }
        }

        let layout =
            MineLayout::from_mine_mask(mines).expect("clamped config should have a valid shape");
        if layout.mine_count() != config.mines {
            log::debug!(
                "Placed {} distinct mines, requested {}",
                layout.mine_count(),
                config.mines
            );
        }
        layout
    }
}

fn clamp_config(config: GameConfig) -> GameConfig {
    let clamped = GameConfig::new(config.size, config.mines);
    if clamped.mines < config.mines {
        log::warn!(
            "Minefield already full, requested {} mines but only {} fit",
            config.mines,
            clamped.total_cells()
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::new((16, 12), 30);

        for placement in [Placement::Exact, Placement::WithReplacement] {
            let a = RandomMineGenerator::new(42, placement).generate(config);
            let b = RandomMineGenerator::new(42, placement).generate(config);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn exact_placement_hits_requested_count() {
        for seed in 0..16 {
            let layout =
                RandomMineGenerator::new(seed, Placement::Exact).generate(GameConfig::default());

            assert_eq!(layout.size(), (20, 20));
            assert_eq!(layout.mine_count(), 50);
        }
    }

    #[test]
    fn replacement_placement_never_exceeds_requested_count() {
        for seed in 0..16 {
            let layout = RandomMineGenerator::new(seed, Placement::WithReplacement)
                .generate(GameConfig::new((4, 4), 12));

            assert!(layout.mine_count() >= 1);
            assert!(layout.mine_count() <= 12);
        }
    }

    #[test]
    fn overfull_request_fills_board() {
        let layout = RandomMineGenerator::new(7, Placement::Exact)
            .generate(GameConfig::new_unchecked((3, 3), 20));

        assert_eq!(layout.mine_count(), 9);
    }

    #[test]
    fn zero_mines_gives_empty_layout() {
        let layout =
            RandomMineGenerator::new(7, Placement::Exact).generate(GameConfig::new((5, 5), 0));

        assert_eq!(layout.mine_count(), 0);
        assert_eq!(layout.iter_mines().count(), 0);
    }
}
