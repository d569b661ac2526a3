use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::board::Board;
use super::bot_controller::{calculate_random_move, select_computer_move};
use super::game_state::{GameState, apply_human_move, new_game};
use super::types::{Difficulty, GameStatus, IllegalMove, Player};
use crate::games::SessionRng;
use crate::{debug_log, log};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone)]
pub struct TicTacToeSessionSettings {
    pub bot_delay: Duration,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            bot_delay: DEFAULT_BOT_DELAY,
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
    pub bot_thinking: bool,
    pub last_move: Option<usize>,
    pub difficulty: Difficulty,
    pub generation: u64,
}

struct PendingBotMove {
    generation: u64,
    token: CancellationToken,
}

type UpdateListener = Arc<dyn Fn() + Send + Sync>;

struct TicTacToeSessionState {
    game: GameState,
    difficulty: Difficulty,
    rng: SessionRng,
    generation: u64,
    pending: Option<PendingBotMove>,
    bot_task: Option<JoinHandle<()>>,
    update_listener: Option<UpdateListener>,
}

impl TicTacToeSessionState {
    fn new(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            game: new_game(),
            difficulty,
            rng,
            generation: 0,
            pending: None,
            bot_task: None,
            update_listener: None,
        }
    }

    fn start_new_game(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
            log!("Cancelled pending computer move for game {}", pending.generation);
        }

        self.generation += 1;
        self.game = new_game();
        log!("Game {} started", self.generation);
    }

    /// Applies the computer's move. A missing or rejected move falls back to a
    /// random empty cell so the turn always returns to the human.
    fn land_bot_move(&mut self, calculated: Option<usize>) -> Option<usize> {
        self.pending = None;

        if let Some(index) = calculated {
            match self.game.apply_move(index, Player::COMPUTER) {
                Ok(next) => {
                    self.game = next;
                    return Some(index);
                }
                Err(e) => log!("Computer move at {} rejected: {}", index, e),
            }
        }

        let fallback = calculate_random_move(&self.game.board, &mut self.rng);
        if let Some(index) = fallback
            && let Ok(next) = self.game.apply_move(index, Player::COMPUTER)
        {
            log!("Computer fell back to a random move at {}", index);
            self.game = next;
            return Some(index);
        }

        log!("Computer could not move in game {}, starting over", self.generation);
        self.start_new_game();
        None
    }

    fn is_current(&self, generation: u64, token: &CancellationToken) -> bool {
        !token.is_cancelled()
            && self.generation == generation
            && self
                .pending
                .as_ref()
                .is_some_and(|pending| pending.generation == generation)
    }
}

/// One human-vs-computer game. Clones share the same game.
///
/// Human moves are applied immediately. When the game goes on, the computer's
/// reply is scheduled on the runtime after `bot_delay`; until it lands, further
/// human moves are rejected with [`IllegalMove::BotThinking`]. [`reset`] cancels
/// the scheduled reply, and a reply computed for an older game is discarded.
///
/// [`reset`]: TicTacToeSession::reset
#[derive(Clone)]
pub struct TicTacToeSession {
    state: Arc<Mutex<TicTacToeSessionState>>,
    runtime: Handle,
    bot_delay: Duration,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, runtime: Handle) -> Self {
        let rng = settings
            .seed
            .map(SessionRng::new)
            .unwrap_or_else(SessionRng::from_random);

        log!(
            "New session: difficulty {}, bot delay {:?}, seed {}",
            settings.difficulty,
            settings.bot_delay,
            rng.seed()
        );

        Self {
            state: Arc::new(Mutex::new(TicTacToeSessionState::new(settings.difficulty, rng))),
            runtime,
            bot_delay: settings.bot_delay,
        }
    }

    fn lock(&self) -> MutexGuard<'_, TicTacToeSessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            board: state.game.board,
            turn: state.game.turn,
            status: state.game.status(),
            bot_thinking: state.pending.is_some(),
            last_move: state.game.last_move,
            difficulty: state.difficulty,
            generation: state.generation,
        }
    }

    /// Called after every state change, outside the session lock.
    pub fn set_update_listener(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.lock().update_listener = Some(Arc::new(listener));
    }

    pub fn difficulty(&self) -> Difficulty {
        self.lock().difficulty
    }

    /// Takes effect on the next computer move, including one already scheduled.
    pub fn set_difficulty(&self, difficulty: Difficulty) {
        let mut state = self.lock();
        if state.difficulty != difficulty {
            log!("Difficulty changed from {} to {}", state.difficulty, difficulty);
            state.difficulty = difficulty;
        }
    }

    pub fn place_human_mark(&self, index: usize) -> Result<GameStatus, IllegalMove> {
        let mut state = self.lock();

        if state.pending.is_some() {
            debug_log!("Ignoring human move at {} while the computer is thinking", index);
            return Err(IllegalMove::BotThinking);
        }

        let next = apply_human_move(&state.game, index)
            .inspect_err(|e| log!("Rejected human move at {}: {}", index, e))?;
        state.game = next;

        let status = next.status();
        log!("Human placed X at {}", index);

        if status.is_over() {
            log!("Game {} finished: {:?}", state.generation, status);
        } else {
            self.schedule_bot_move(&mut state);
        }

        let listener = state.update_listener.clone();
        drop(state);
        notify(listener);

        Ok(status)
    }

    /// Starts a fresh game and cancels any computer move still in flight.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.start_new_game();

        let listener = state.update_listener.clone();
        drop(state);
        notify(listener);
    }

    /// Waits for the most recently scheduled computer move task to finish.
    pub async fn settle(&self) {
        let task = self.lock().bot_task.take();
        if let Some(task) = task
            && let Err(e) = task.await
        {
            log!("Computer move task failed: {}", e);
        }
    }

    fn schedule_bot_move(&self, state: &mut TicTacToeSessionState) {
        let token = CancellationToken::new();
        let generation = state.generation;
        state.pending = Some(PendingBotMove {
            generation,
            token: token.clone(),
        });

        let session = self.clone();
        state.bot_task = Some(
            self.runtime
                .spawn(async move { session.play_bot_turn(generation, token).await }),
        );
    }

    async fn play_bot_turn(self, generation: u64, token: CancellationToken) {
        tokio::select! {
            _ = token.cancelled() => {
                debug_log!("Computer move for game {} cancelled before it started", generation);
                return;
            }
            _ = tokio::time::sleep(self.bot_delay) => {}
        }

        let (board, difficulty, seed) = {
            let mut state = self.lock();
            if !state.is_current(generation, &token) {
                return;
            }
            (state.game.board, state.difficulty, state.rng.next_seed())
        };

        let started = Instant::now();
        let calculated_move = tokio::task::spawn_blocking(move || {
            let mut rng = SessionRng::new(seed);
            select_computer_move(&board, difficulty, &mut rng)
        })
        .await;

        let mut state = self.lock();
        if !state.is_current(generation, &token) {
            log!("Discarding computer move computed for game {}", generation);
            return;
        }

        let calculated_move = calculated_move
            .inspect_err(|e| log!("Computer move calculation failed: {}", e))
            .ok()
            .flatten();

        if let Some(index) = state.land_bot_move(calculated_move) {
            log!(
                "Computer ({}) placed O at {} in {:?}",
                difficulty,
                index,
                started.elapsed()
            );
            let status = state.game.status();
            if status.is_over() {
                log!("Game {} finished: {:?}", generation, status);
            }
        }

        let listener = state.update_listener.clone();
        drop(state);
        notify(listener);
    }
}

fn notify(listener: Option<UpdateListener>) {
    if let Some(listener) = listener {
        listener();
    }
}
