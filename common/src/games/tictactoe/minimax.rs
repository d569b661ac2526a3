use super::board::{Board, get_available_moves};
use super::types::Player;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

/// Minimax value of every empty cell for `bot`, in index order.
///
/// Scores are from `bot`'s point of view: a win `d` plies after the candidate
/// move scores `10 - d`, a loss `d - 10`, a draw `0`. The whole tree is
/// searched; every node gets its own board copy, so `board` is never touched.
pub fn minimax_scores(board: &Board, bot: Player) -> Vec<ScoredMove> {
    get_available_moves(board)
        .into_iter()
        .map(|index| ScoredMove {
            index,
            score: minimax(&board.with_mark(index, bot.mark()), 0, false, bot),
        })
        .collect()
}

/// Highest-scoring move for `bot`; the lowest index wins ties.
pub fn best_minimax_move(board: &Board, bot: Player) -> Option<ScoredMove> {
    minimax_scores(board, bot)
        .into_iter()
        .fold(None, |best, candidate| match best {
            Some(best) if best.score >= candidate.score => Some(best),
            _ => Some(candidate),
        })
}

pub fn calculate_minimax_move(board: &Board, bot: Player) -> Option<usize> {
    best_minimax_move(board, bot).map(|scored| scored.index)
}

fn minimax(board: &Board, depth: i32, is_maximizing: bool, bot: Player) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        moves
            .into_iter()
            .map(|index| minimax(&board.with_mark(index, bot.mark()), depth + 1, false, bot))
            .max()
            .unwrap_or(0)
    } else {
        let opponent = bot.opponent();
        moves
            .into_iter()
            .map(|index| minimax(&board.with_mark(index, opponent.mark()), depth + 1, true, bot))
            .min()
            .unwrap_or(0)
    }
}
