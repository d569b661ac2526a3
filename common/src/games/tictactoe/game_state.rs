use super::board::Board;
use super::types::{CELL_COUNT, GameStatus, IllegalMove, Player};
use super::win_detector::evaluate;

/// Board plus whose move is next. Moves produce a new value; the old one is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub last_move: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            turn: Player::HUMAN,
            last_move: None,
        }
    }
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    pub fn apply_move(&self, index: usize, player: Player) -> Result<GameState, IllegalMove> {
        if self.status().is_over() {
            return Err(IllegalMove::GameOver);
        }

        if player != self.turn {
            return Err(IllegalMove::NotYourTurn { player });
        }

        if index >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange { index });
        }

        if !self.board.is_empty_at(index) {
            return Err(IllegalMove::CellOccupied { index });
        }

        let board = self.board.with_mark(index, player.mark());
        let turn = if evaluate(&board).is_over() {
            self.turn
        } else {
            player.opponent()
        };

        Ok(GameState {
            board,
            turn,
            last_move: Some(index),
        })
    }
}

pub fn new_game() -> GameState {
    GameState::default()
}

pub fn apply_human_move(state: &GameState, index: usize) -> Result<GameState, IllegalMove> {
    state.apply_move(index, Player::HUMAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn play(moves: &[usize]) -> GameState {
        let mut state = new_game();
        for &index in moves {
            state = state.apply_move(index, state.turn).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game_is_reset() {
        let state = new_game();
        assert!(state.board.cells().iter().all(|cell| cell.is_empty()));
        assert_eq!(state.turn, Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_human_move_places_x_and_passes_turn() {
        let state = apply_human_move(&new_game(), 4).unwrap();
        assert_eq!(state.board.get(4), Some(Mark::X));
        assert_eq!(state.turn, Player::O);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let state = play(&[4]);
        let before = state;
        assert_eq!(
            state.apply_move(4, Player::O),
            Err(IllegalMove::CellOccupied { index: 4 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            apply_human_move(&new_game(), 9),
            Err(IllegalMove::OutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        assert_eq!(
            new_game().apply_move(0, Player::O),
            Err(IllegalMove::NotYourTurn { player: Player::O })
        );
        let state = play(&[0]);
        assert_eq!(
            apply_human_move(&state, 1),
            Err(IllegalMove::NotYourTurn { player: Player::X })
        );
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        // X: 0, 1, 2 / O: 3, 4
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status().winner(), Some(Player::X));
        assert_eq!(state.turn, Player::X);
        assert_eq!(state.apply_move(5, Player::O), Err(IllegalMove::GameOver));
        assert_eq!(state.apply_move(5, Player::X), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_turn_strictly_alternates_and_counts_stay_balanced() {
        let order = [4, 0, 8, 2, 1, 7, 6, 3, 5];
        let mut state = new_game();
        for index in order {
            if state.status().is_over() {
                break;
            }
            let mover = state.turn;
            assert_eq!(
                state.apply_move(index, mover.opponent()),
                Err(IllegalMove::NotYourTurn { player: mover.opponent() })
            );
            state = state.apply_move(index, mover).unwrap();
            if !state.status().is_over() {
                assert_eq!(state.turn, mover.opponent());
            }
            let x = state.board.count(Mark::X);
            let o = state.board.count(Mark::O);
            assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn test_complete_lines_share_winner_and_last_move() {
        use crate::games::tictactoe::board::get_available_moves;
        use crate::games::tictactoe::win_detector::WINNING_LINES;

        fn walk(state: GameState, visited: &mut usize) {
            *visited += 1;
            let cells = state.board.cells();
            let complete: Vec<_> = WINNING_LINES
                .iter()
                .filter(|line| {
                    let [a, b, c] = line.cells;
                    !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
                })
                .collect();
            if !complete.is_empty() {
                // Play stops at the first win, so every complete line runs through the last move.
                let last = state.last_move.unwrap();
                let winner = state.status().winner().unwrap();
                assert!(complete.iter().all(|line| line.contains(last)));
                assert!(complete.iter().all(|line| cells[line.cells[0]] == winner.mark()));
            }
            if state.status().is_over() {
                return;
            }
            for index in get_available_moves(&state.board) {
                walk(state.apply_move(index, state.turn).unwrap(), visited);
            }
        }

        let mut visited = 0;
        walk(new_game(), &mut visited);
        assert!(visited > 5000);
    }
}
