use tictactoe_common::games::tictactoe::{CELL_COUNT, GameStatus, Mark, SessionSnapshot};

const GRID_SIZE: usize = 3;
const MIN_CELL_SIZE: f32 = 60.0;
const MAX_CELL_SIZE: f32 = 140.0;
const LINE_WIDTH: f32 = 2.0;

pub fn status_message(snapshot: &SessionSnapshot) -> String {
    match snapshot.status {
        GameStatus::Won { player, .. } => format!("{} wins!", player),
        GameStatus::Drawn => "Draw!".to_string(),
        GameStatus::InProgress if snapshot.bot_thinking => "Computer is thinking...".to_string(),
        GameStatus::InProgress => format!("{} to move", snapshot.turn),
    }
}

/// Board cell under `pos`, given the board's top-left corner and cell size.
pub fn cell_at(board_min: egui::Pos2, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
    let offset = pos - board_min;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let column = (offset.x / cell_size) as usize;
    let row = (offset.y / cell_size) as usize;
    (column < GRID_SIZE && row < GRID_SIZE).then_some(row * GRID_SIZE + column)
}

/// Draws the board and returns the empty cell the player clicked, if any.
pub fn render_board(ui: &mut egui::Ui, snapshot: &SessionSnapshot) -> Option<usize> {
    let cell_size = (ui.available_width().min(ui.available_height()) / GRID_SIZE as f32)
        .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
    let board_size = cell_size * GRID_SIZE as f32;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

    let winning_line = snapshot.status.winning_line();
    for index in 0..CELL_COUNT {
        let cell = cell_rect(rect, cell_size, index);

        if winning_line.is_some_and(|line| line.contains(index)) {
            painter.rect_filled(cell, 0.0, egui::Color32::from_rgb(255, 220, 120));
        } else if snapshot.last_move == Some(index) {
            painter.rect_filled(cell, 0.0, egui::Color32::from_rgb(225, 225, 200));
        }

        match snapshot.board.get(index) {
            Some(Mark::X) => draw_x(painter, cell),
            Some(Mark::O) => draw_o(painter, cell),
            _ => {}
        }
    }

    let stroke = egui::Stroke::new(LINE_WIDTH, egui::Color32::BLACK);
    for i in 1..GRID_SIZE {
        let offset = i as f32 * cell_size;
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
    }

    let accepts_input = !snapshot.bot_thinking && !snapshot.status.is_over();
    let hovered = response
        .hover_pos()
        .filter(|_| accepts_input)
        .and_then(|pos| cell_at(rect.min, cell_size, pos))
        .filter(|&index| snapshot.board.is_empty_at(index));

    if let Some(index) = hovered {
        painter.rect_filled(
            cell_rect(rect, cell_size, index),
            0.0,
            egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
        );
    }

    hovered.filter(|_| response.clicked())
}

fn cell_rect(board: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
    let column = (index % GRID_SIZE) as f32;
    let row = (index / GRID_SIZE) as f32;
    egui::Rect::from_min_size(
        egui::pos2(
            board.left() + column * cell_size,
            board.top() + row * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = (rect.width() / 2.0) - padding;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

    painter.circle_stroke(rect.center(), radius, stroke);
}
