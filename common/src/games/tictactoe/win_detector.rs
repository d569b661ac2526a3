use super::board::Board;
use super::types::{GameStatus, Player, WinningLine};

/// Rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

pub fn check_win_with_line(board: &Board) -> Option<(Player, WinningLine)> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells;
        let player = cells[a].player()?;
        (cells[a] == cells[b] && cells[a] == cells[c]).then_some((player, *line))
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|(player, _)| player)
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = check_win_with_line(board) {
        return GameStatus::Won { player, line };
    }

    if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        let row = evaluate(&Board::from_pattern("___OOOXX_"));
        assert_eq!(
            row,
            GameStatus::Won {
                player: Player::O,
                line: WinningLine::new([3, 4, 5])
            }
        );

        let column = evaluate(&Board::from_pattern("_XO_XO_X_"));
        assert_eq!(column.winner(), Some(Player::X));
        assert_eq!(column.winning_line(), Some(WinningLine::new([1, 4, 7])));

        let diagonal = evaluate(&Board::from_pattern("OX_XO_X_O"));
        assert_eq!(diagonal.winning_line(), Some(WinningLine::new([0, 4, 8])));
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        assert_eq!(evaluate(&Board::from_pattern("XOXXOOOXX")), GameStatus::Drawn);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let status = evaluate(&Board::from_pattern("XXXOOXOXO"));
        assert_eq!(status.winner(), Some(Player::X));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        assert_eq!(check_win(&Board::from_pattern("XX_OO____")), None);
    }
}
