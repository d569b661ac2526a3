use super::board::{Board, get_available_moves};
use super::types::{CENTER, CORNERS, Mark, Player};
use super::win_detector::WINNING_LINES;
use crate::games::SessionRng;

/// Win, block, center, random corner, random cell, in that order.
pub fn calculate_heuristic_move(board: &Board, bot: Player, rng: &mut SessionRng) -> Option<usize> {
    if let Some(index) = find_winning_move(board, bot.mark()) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, bot.opponent().mark()) {
        return Some(index);
    }

    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    let corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_empty_at(index))
        .collect();
    if let Some(index) = rng.choose(&corners) {
        return Some(index);
    }

    rng.choose(&get_available_moves(board))
}

/// First line (in scan order) holding two `mark`s and one empty cell; returns that cell.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|line| {
        let marked = line.cells.iter().filter(|&&i| cells[i] == mark).count();
        let empty = line.cells.iter().copied().find(|&i| cells[i].is_empty());
        if marked == 2 { empty } else { None }
    })
}
