use alloc::vec::Vec;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Phases of a session. Every wait is a phase plus a countdown.
///
/// Valid transitions:
/// - Title -> Start
/// - Start -> Select
/// - Select -> Check1 | GameOver
/// - Check1 -> Delete | Select
/// - Delete -> Dropdown -> Refill -> WaitDroppedAll -> Check2
/// - Check2 -> Delete | CheckTenpai
/// - CheckTenpai -> Select | NoMoreMove
/// - NoMoreMove -> Select
/// - GameOver -> WaitRestart -> Start
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Title,
    Start,
    Select,
    Check1,
    Delete,
    Check2,
    Dropdown,
    Refill,
    WaitDroppedAll,
    CheckTenpai,
    NoMoreMove,
    GameOver,
    WaitRestart,
}

impl Phase {
    pub const fn accepts_swaps(self) -> bool {
        matches!(self, Self::Select)
    }

    pub const fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Title, Start)
                | (Start, Select)
                | (Select, Check1 | GameOver)
                | (Check1, Delete | Select)
                | (Delete, Dropdown)
                | (Dropdown, Refill)
                | (Refill, WaitDroppedAll)
                | (WaitDroppedAll, Check2)
                | (Check2, Delete | CheckTenpai)
                | (CheckTenpai, Select | NoMoreMove)
                | (NoMoreMove, Select)
                | (GameOver, WaitRestart)
                | (WaitRestart, Start)
        )
    }

    /// Whether the session has ended and only a restart can follow.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::GameOver | Self::WaitRestart)
    }
}

/// One game session: the board, the clocks, the score and the phase
/// sequencing them.
///
/// Drive it with [`tick`](Self::tick) once per fixed step, feed player input
/// through [`select`](Self::select) or [`attempt_swap`](Self::attempt_swap)
/// and call [`animate`](Self::animate) once per rendered frame.
#[derive(Clone, Debug)]
pub struct PuzzleEngine<S = SmallRng> {
    config: GameConfig,
    source: S,
    board: Board,
    phase: Phase,
    timer: PhaseTimer,
    game_timer: GameTimer,
    score: u32,
    score_label: u32,
    combo: u32,
    popup: Option<Popup>,
    banner: Banner,
    selection: Option<Coord2>,
    pending_swap: Option<SwapIntent>,
    hint: bool,
    events: Vec<Event>,
}

impl PuzzleEngine<SmallRng> {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_source(config, SmallRng::seed_from_u64(seed))
    }

    /// Replaces the random source, e.g. to retry after a failed generation.
    pub fn reseed(&mut self, seed: u64) {
        log::debug!("reseeded with {}", seed);
        self.replace_source(SmallRng::seed_from_u64(seed));
    }
}

impl<S: TileSource> PuzzleEngine<S> {
    pub fn with_source(config: GameConfig, source: S) -> Self {
        Self {
            config,
            source,
            board: Board::new(config.size),
            phase: Phase::Title,
            timer: PhaseTimer::default(),
            game_timer: GameTimer::new(config.game_ticks),
            score: 0,
            score_label: 0,
            combo: 0,
            popup: None,
            banner: Banner::Title,
            selection: None,
            pending_swap: None,
            hint: false,
            events: Vec::new(),
        }
    }

    /// Swaps in another tile source, kept across restarts.
    pub fn replace_source(&mut self, source: S) {
        self.source = source;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score as last shown to the player, refreshed in select and cascades.
    pub fn score_label(&self) -> u32 {
        self.score_label
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn game_timer(&self) -> &GameTimer {
        &self.game_timer
    }

    pub fn phase_timer(&self) -> &PhaseTimer {
        &self.timer
    }

    pub fn popup(&self) -> Option<Popup> {
        self.popup
    }

    pub fn banner(&self) -> Banner {
        self.banner
    }

    pub fn selection(&self) -> Option<Coord2> {
        self.selection
    }

    pub fn hint(&self) -> bool {
        self.hint
    }

    pub fn set_hint(&mut self, hint: bool) {
        self.hint = hint;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(self)
    }

    /// Hands over the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    pub fn all_settled(&self) -> bool {
        self.board.all_settled()
    }

    /// Moves every tile one step toward its target.
    pub fn animate(&mut self) {
        self.board.animate();
    }

    /// Starts a session from the title or, once the lock ran out, after a
    /// game over. Returns whether the request was honored.
    pub fn request_restart(&mut self) -> bool {
        let accepted = match self.phase {
            Phase::Title => true,
            Phase::WaitRestart => self.timer.is_expired(),
            _ => false,
        };
        if accepted {
            self.advance(Phase::Start, 0);
        } else {
            log::trace!("restart ignored in {:?}", self.phase);
        }
        accepted
    }

    /// Whether player picks are taken right now. An empty clock ends the
    /// session even before the next tick moves to game over.
    pub fn accepts_input(&self) -> bool {
        self.phase.accepts_swaps() && !self.game_timer.is_exhausted()
    }

    /// One click on the board: the first pick is remembered, the second one
    /// completes a swap attempt.
    pub fn select(&mut self, coords: Coord2) -> Result<SwapOutcome> {
        if !self.accepts_input() {
            return Ok(SwapOutcome::Ignored);
        }
        let coords = self.board.validate_coords(coords)?;

        match self.selection.take() {
            Some(first) => self.attempt_swap(first, coords),
            None => {
                if let Some(tile) = self.board.get_mut(coords) {
                    tile.selected = true;
                }
                self.selection = Some(coords);
                Ok(SwapOutcome::Selected)
            }
        }
    }

    /// Tries to swap `a` and `b`. Outside the select phase, or once the clock
    /// ran out, this is a no-op.
    pub fn attempt_swap(&mut self, a: Coord2, b: Coord2) -> Result<SwapOutcome> {
        if !self.accepts_input() {
            return Ok(SwapOutcome::Ignored);
        }
        let intent = SwapIntent::new(
            self.board.validate_coords(a)?,
            self.board.validate_coords(b)?,
        );

        self.selection = None;
        self.board.clear_selection();

        match check_swap(&self.board, intent) {
            SwapCheck::Deselect => Ok(SwapOutcome::Deselected),
            SwapCheck::Legal => {
                log::debug!("swap {:?} <-> {:?}", intent.first, intent.second);
                apply_swap(&mut self.board, intent);
                self.pending_swap = Some(intent);
                self.combo = 0;
                self.events.push(Event::SwapAccepted);
                self.advance(Phase::Check1, self.config.timings.swap);
                Ok(SwapOutcome::Accepted)
            }
            check => {
                log::debug!("swap {:?} rejected: {:?}", intent, check);
                self.events.push(Event::SwapRejected);
                Ok(SwapOutcome::Rejected)
            }
        }
    }

    /// Advances the session by one fixed step.
    ///
    /// Fails only when no playable board can be generated; the phase is left
    /// as it was so a later tick retries.
    pub fn tick(&mut self) -> Result<()> {
        use Phase::*;

        let outcome = match self.phase {
            Title => Ok(()),
            Start => self.on_start(),
            Select => {
                self.on_select();
                Ok(())
            }
            Check1 => {
                self.on_check1();
                Ok(())
            }
            Delete => {
                self.on_delete();
                Ok(())
            }
            Check2 => {
                self.on_check2();
                Ok(())
            }
            Dropdown => {
                self.on_dropdown();
                Ok(())
            }
            Refill => {
                self.on_refill();
                Ok(())
            }
            WaitDroppedAll => {
                self.on_wait_dropped_all();
                Ok(())
            }
            CheckTenpai => {
                self.on_check_tenpai();
                Ok(())
            }
            NoMoreMove => self.on_no_more_move(),
            GameOver => {
                self.on_game_over();
                Ok(())
            }
            WaitRestart => {
                self.on_wait_restart();
                Ok(())
            }
        };

        if let Some(popup) = self.popup.as_mut() {
            if !popup.tick() {
                self.popup = None;
            }
        }
        self.timer.tick();

        outcome
    }

    fn advance(&mut self, next: Phase, delay: u32) {
        assert!(
            self.phase.can_advance_to(next),
            "no transition from {:?} to {:?}",
            self.phase,
            next
        );
        log::debug!("{:?} -> {:?} ({} ticks)", self.phase, next, delay);
        self.phase = next;
        self.timer.load(delay);
    }

    fn generate_board(&mut self) -> Result<Board> {
        RandomBoardGenerator::new(&mut self.source).generate(&self.config)
    }

    fn on_start(&mut self) -> Result<()> {
        self.board = self.generate_board()?;
        self.score = 0;
        self.score_label = 0;
        self.combo = 0;
        self.popup = None;
        self.banner = Banner::None;
        self.selection = None;
        self.pending_swap = None;
        self.events.clear();
        self.game_timer.reload();
        log::info!("new game, {} ticks on the clock", self.game_timer.remaining());
        self.advance(Phase::Select, 0);
        Ok(())
    }

    fn on_select(&mut self) {
        self.score_label = self.score;
        self.combo = 0;

        if self.game_timer.is_exhausted() {
            self.advance(Phase::GameOver, 0);
            return;
        }

        if self.game_timer.tick() {
            log::debug!("hurry up, {} ticks left", self.game_timer.remaining());
            self.events.push(Event::Urgency);
        }
    }

    fn on_check1(&mut self) {
        if !self.timer.is_expired() {
            return;
        }

        let swap = self.pending_swap.take();
        if scan_matches(&mut self.board) {
            self.advance(Phase::Delete, self.config.timings.first_delete);
        } else {
            if let Some(intent) = swap {
                log::debug!("no match, reverting {:?}", intent);
                apply_swap(&mut self.board, intent);
            }
            self.events.push(Event::SwapReverted);
            self.advance(Phase::Select, 0);
        }
    }

    fn on_delete(&mut self) {
        if !self.timer.is_expired() {
            return;
        }

        let removed = delete_matched(&mut self.board);
        let points = score_for(removed, self.combo);
        self.score = self.score.saturating_add(points);
        self.popup = Some(Popup::new(points, self.config.timings.popup));
        self.game_timer.extend(removed.into());
        self.events.push(Event::ScoreAwarded {
            combo: self.combo,
            points,
        });
        log::debug!(
            "cleared {} tiles at combo {} for {} points",
            removed,
            self.combo,
            points
        );
        self.advance(Phase::Dropdown, self.config.timings.drop);
    }

    fn on_check2(&mut self) {
        self.score_label = self.score;
        self.combo += 1;

        if scan_matches(&mut self.board) {
            self.advance(Phase::Delete, self.config.timings.chain_delete);
        } else {
            self.advance(Phase::CheckTenpai, 0);
        }
    }

    fn on_dropdown(&mut self) {
        if self.timer.is_expired() {
            drop_tiles(&mut self.board);
            self.advance(Phase::Refill, self.config.timings.refill);
        }
    }

    fn on_refill(&mut self) {
        if self.timer.is_expired() && self.board.all_settled() {
            refill(&mut self.board, self.config.kinds, &mut self.source);
            self.advance(Phase::WaitDroppedAll, self.config.timings.settle);
        }
    }

    fn on_wait_dropped_all(&mut self) {
        if self.timer.is_expired() && self.board.all_settled() {
            self.advance(Phase::Check2, 0);
        }
    }

    fn on_check_tenpai(&mut self) {
        if scan_tenpai(&mut self.board) > 0 {
            self.advance(Phase::Select, 0);
        } else {
            log::info!("no more moves, replacing the board");
            self.board.exit_all();
            self.banner = Banner::NoMoreMove;
            self.events.push(Event::NoMoreMove);
            self.advance(Phase::NoMoreMove, self.config.timings.no_more_move);
        }
    }

    fn on_no_more_move(&mut self) -> Result<()> {
        if !self.timer.is_expired() {
            return Ok(());
        }

        self.board = self.generate_board()?;
        self.banner = Banner::None;
        self.events.push(Event::BoardRegenerated);
        self.advance(Phase::Select, 0);
        Ok(())
    }

    fn on_game_over(&mut self) {
        log::info!("game over, final score {}", self.score);
        self.selection = None;
        self.board.exit_all();
        self.banner = Banner::GameOver;
        self.events.push(Event::GameOver);
        self.advance(Phase::WaitRestart, self.config.timings.restart_lock);
    }

    fn on_wait_restart(&mut self) {
        if self.timer.is_expired() {
            self.banner = Banner::RestartPrompt;
        }
    }
}
