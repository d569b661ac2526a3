mod board;
mod bot_controller;
mod game_state;
mod heuristic;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{calculate_move, calculate_random_move, select_computer_move};
pub use game_state::{GameState, apply_human_move, new_game};
pub use heuristic::{calculate_heuristic_move, find_winning_move};
pub use minimax::{ScoredMove, best_minimax_move, calculate_minimax_move, minimax_scores};
pub use session::{
    DEFAULT_BOT_DELAY, SessionSnapshot, TicTacToeSession, TicTacToeSessionSettings,
};
pub use types::{
    CELL_COUNT, CENTER, CORNERS, Difficulty, GameStatus, IllegalMove, Mark, Player, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
