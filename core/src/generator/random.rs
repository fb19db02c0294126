use super::*;

/// Fills the board at random, then cascades away any run of three and keeps
/// only boards that still have a productive move.
///
/// Tiles start one row above their slot so a fresh board visibly drops in.
#[derive(Debug)]
pub struct RandomBoardGenerator<'a, S: ?Sized> {
    source: &'a mut S,
}

impl<'a, S: TileSource + ?Sized> RandomBoardGenerator<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    fn fill(&mut self, config: &GameConfig) -> Board {
        let mut board = Board::new(config.size);
        for coords in board.iter_coords() {
            let kind = self.source.next_kind(config.kinds);
            let motion = Motion::falling_into(coords, coords.1 as i16 - 1);
            board.set(coords, Some(Tile::new(kind, motion)));
        }
        board
    }
}

impl<S: TileSource + ?Sized> BoardGenerator for RandomBoardGenerator<'_, S> {
    fn generate(mut self, config: &GameConfig) -> Result<Board> {
        let attempts = config.max_generation_attempts;

        for attempt in 1..=attempts {
            let mut board = self.fill(config);

            let settled = settle(
                &mut board,
                config.kinds,
                &mut *self.source,
                config.max_settle_rounds,
            );
            let Some(rounds) = settled else {
                log::warn!(
                    "Discarding board on attempt {}, still matching after {} cascades",
                    attempt,
                    config.max_settle_rounds
                );
                continue;
            };

            let tenpai = scan_tenpai(&mut board);
            if tenpai == 0 {
                log::warn!("Discarding dead board on attempt {}", attempt);
                continue;
            }

            log::debug!(
                "Generated board on attempt {} after {} cascades, {} tenpai cells",
                attempt,
                rounds,
                tenpai
            );
            return Ok(board);
        }

        log::error!("No playable board after {} attempts", attempts);
        Err(GameError::GenerationExhausted { attempts })
    }
}
