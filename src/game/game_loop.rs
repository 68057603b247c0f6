//! Round controller.
//!
//! Drives one game through `Spawning → Evaluating → AwaitingInput → Applying` and back,
//! until the player quits. Win and loss park the game in `Ended`, where only restart
//! and quit are accepted.

use chrono::Local;
use log::{debug, info, log_enabled, trace, warn, Level};
use rand::Rng;

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::grid::Grid;
use crate::game::state::SessionState;
use crate::game::systems::{apply_move, has_moves, is_win, spawn_tiles, CommandSource, Renderer, RoundView};
use crate::game::types::{Command, Direction, MoveResult, Status};

/// Where the controller is in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Evaluating,
    AwaitingInput,
    Applying(Direction),
    Restart,
    /// Won or lost; waiting for restart or quit.
    Ended,
    Quit,
}

pub struct RoundController<R, I, G> {
    config: GameConfig,
    state: SessionState,
    renderer: R,
    input: I,
    rng: G,
}

impl<R, I, G> RoundController<R, I, G>
where
    R: Renderer,
    I: CommandSource,
    G: Rng,
{
    pub fn new(config: GameConfig, renderer: R, input: I, rng: G) -> Result<Self> {
        config.validate()?;
        let state = SessionState::new(config.grid_size)?;
        Ok(Self { config, state, renderer, input, rng })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replace the live grid, keeping the counters.
    pub fn load_grid(&mut self, grid: Grid) {
        self.state.grid = grid;
    }

    /// Play until the player quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("[Round] New game: game_id={} size={}", self.state.game_id, self.config.grid_size);
        let mut phase = Phase::Spawning;
        while phase != Phase::Quit {
            phase = self.advance(phase).await?;
        }
        info!(
            "[Round] Quit: game_id={} score={} steps={}",
            self.state.game_id, self.state.score, self.state.step
        );
        Ok(())
    }

    /// Perform one transition and return the next phase.
    pub async fn advance(&mut self, phase: Phase) -> Result<Phase> {
        let next = match phase {
            Phase::Spawning => self.spawn(),
            Phase::Evaluating => self.evaluate(),
            Phase::AwaitingInput => {
                self.draw(None)?;
                match self.input.next_command().await? {
                    Command::Move(direction) => Phase::Applying(direction),
                    Command::Restart => Phase::Restart,
                    Command::Quit => Phase::Quit,
                }
            }
            Phase::Applying(direction) => {
                let result = self.apply(direction);
                self.renderer.notify(
                    &format!("pressed {:?}: changed={}", direction, result.changed),
                    Local::now(),
                );
                if result.changed { Phase::Spawning } else { Phase::AwaitingInput }
            }
            Phase::Restart => {
                self.state.reset()?;
                info!("[Round] Restart: game_id={}", self.state.game_id);
                Phase::Spawning
            }
            Phase::Ended => self.wait_after_end().await?,
            Phase::Quit => Phase::Quit,
        };
        debug!("[Round] {:?} -> {:?}", phase, next);
        Ok(next)
    }

    /// Merge the grid towards `direction` and update the step counter.
    pub fn apply(&mut self, direction: Direction) -> MoveResult {
        let result = apply_move(&mut self.state.grid, direction);
        if result.changed && !result.axis_full {
            self.state.step += 1;
        }
        self.trace_snapshot();
        result
    }

    fn spawn(&mut self) -> Phase {
        match spawn_tiles(&mut self.state.grid, self.config.spawn_count(), &mut self.rng) {
            Some(spawned) => {
                self.state.score += spawned.iter().map(|tile| u64::from(tile.value)).sum::<u64>();
                self.trace_snapshot();
                Phase::Evaluating
            }
            None if has_moves(&self.state.grid) => {
                debug!("[Round] Grid packed but still mergeable, nothing spawned");
                Phase::Evaluating
            }
            None => self.finish(Status::Lose),
        }
    }

    fn evaluate(&mut self) -> Phase {
        if is_win(&self.state.grid, self.config.win_threshold) {
            self.finish(Status::Win)
        } else {
            Phase::AwaitingInput
        }
    }

    fn finish(&mut self, status: Status) -> Phase {
        self.state.status = status;
        info!(
            "[Round] {:?}: game_id={} score={} steps={}\n{}",
            status, self.state.game_id, self.state.score, self.state.step, self.state.grid
        );
        Phase::Ended
    }

    async fn wait_after_end(&mut self) -> Result<Phase> {
        let banner = self.state.status.message();
        self.draw(banner)?;
        if let Some(message) = banner {
            self.renderer.notify(message, Local::now());
        }
        loop {
            match self.input.next_command().await? {
                Command::Restart => return Ok(Phase::Restart),
                Command::Quit => return Ok(Phase::Quit),
                Command::Move(direction) => {
                    debug!("[Round] Ignoring {:?}, game is over", direction);
                }
            }
        }
    }

    fn draw(&mut self, status: Option<&str>) -> Result<()> {
        self.renderer.render(&RoundView {
            grid: &self.state.grid,
            score: self.state.score,
            step: self.state.step,
            status,
        })
    }

    fn trace_snapshot(&self) {
        if !log_enabled!(Level::Trace) {
            return;
        }
        match serde_json::to_string(&self.state) {
            Ok(json) => trace!("[Round] Snapshot: {}", json),
            Err(e) => warn!("[Round] Failed to serialize session: {}", e),
        }
    }
}
