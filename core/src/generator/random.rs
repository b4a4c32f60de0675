use super::*;

/// Uniform placement by rejection sampling: draw a random tile, retry when it already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineSet> {
        use rand::prelude::*;

        config.validate()?;
        log::trace!("Generating minefield with seed {}", self.seed);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mines_placed = 0;

        // terminates since validation keeps at least one tile free
        while mines_placed < config.mines {
            let coords: Coord2 = (
                rng.random_range(0..config.rows),
                rng.random_range(0..config.columns),
            );
            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "Generated {}x{} minefield with {} mines",
            config.rows,
            config.columns,
            mines_placed
        );
        Ok(MineSet::from_mine_mask(mines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn generates_exact_count_of_distinct_in_bounds_mines() {
        let configs = [(1, 2, 1), (3, 3, 8), (8, 8, 15), (5, 11, 30), (16, 30, 99)];

        for (rows, columns, mines) in configs {
            let config = GameConfig::new(rows, columns, mines).unwrap();
            for seed in 0..20 {
                let layout = RandomMinefieldGenerator::new(seed).generate(config).unwrap();
                let coords: BTreeSet<_> = layout.iter().collect();

                assert_eq!(layout.mine_count(), mines);
                assert_eq!(coords.len() as CellCount, mines);
                assert!(coords.iter().all(|&(row, col)| row < rows && col < columns));
                assert_eq!(layout.config(), config);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::default();

        let first = RandomMinefieldGenerator::new(42).generate(config).unwrap();
        let second = RandomMinefieldGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = GameConfig::new_unchecked(2, 2, 4);

        assert_eq!(
            RandomMinefieldGenerator::new(0).generate(config),
            Err(GameError::InvalidConfiguration {
                rows: 2,
                columns: 2,
                mines: 4
            })
        );
    }

    #[test]
    fn every_tile_gets_picked_eventually() {
        let config = GameConfig::new(3, 4, 1).unwrap();
        let mut seen = BTreeSet::new();

        for seed in 0..500 {
            let layout = RandomMinefieldGenerator::new(seed).generate(config).unwrap();
            seen.extend(layout.iter());
        }

        assert_eq!(seen.len(), 12);
    }
}
