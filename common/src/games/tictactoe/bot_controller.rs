use super::board::{Board, get_available_moves};
use super::heuristic::calculate_heuristic_move;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, Player};
use crate::games::SessionRng;

/// Picks the computer's cell for `board`. `None` means the board is full.
pub fn select_computer_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    calculate_move(difficulty, board, Player::COMPUTER, rng)
}

pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    bot: Player,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_heuristic_move(board, bot, rng),
        Difficulty::Hard => calculate_minimax_move(board, bot),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&get_available_moves(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::evaluate;

    #[test]
    fn test_full_board_has_no_move_for_any_difficulty() {
        let board = Board::from_pattern("XOXXOOOXX");
        let mut rng = SessionRng::new(5);
        for difficulty in Difficulty::ALL {
            assert_eq!(select_computer_move(&board, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_random_move_only_picks_empty_cells() {
        let board = Board::from_pattern("XO_XO_O_X");
        let mut rng = SessionRng::new(11);
        let mut seen = [false; 9];
        for _ in 0..200 {
            let index = select_computer_move(&board, Difficulty::Easy, &mut rng).unwrap();
            assert!(board.is_empty_at(index));
            seen[index] = true;
        }
        // Every empty cell comes up eventually.
        assert!(seen[2] && seen[5] && seen[7]);
    }

    #[test]
    fn test_dispatch_follows_difficulty() {
        let mut rng = SessionRng::new(0);
        // Medium takes the center on an open board.
        let board = Board::from_pattern("_______X_");
        assert_eq!(select_computer_move(&board, Difficulty::Medium, &mut rng), Some(4));

        let threat = Board::from_pattern("OO_XX____");
        assert_eq!(select_computer_move(&threat, Difficulty::Hard, &mut rng), Some(2));
        assert_eq!(select_computer_move(&threat, Difficulty::Medium, &mut rng), Some(2));
    }

    #[test]
    fn test_every_difficulty_finishes_a_game() {
        for difficulty in Difficulty::ALL {
            let mut rng = SessionRng::new(3);
            let mut board = Board::new();
            let mut mover = Player::X;
            while !evaluate(&board).is_over() {
                let index = calculate_move(difficulty, &board, mover, &mut rng).unwrap();
                assert!(board.is_empty_at(index));
                board = board.with_mark(index, mover.mark());
                mover = mover.opponent();
            }
        }
    }
}
