mod tictactoe;

pub use tictactoe::{render_board, status_message};
