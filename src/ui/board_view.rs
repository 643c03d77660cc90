//! Board rendering for the Renju GUI

use crate::{CellStatus, Color, Pos, Snapshot, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are only reported while `accepts_moves` is set.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &Snapshot,
        winning_line: Option<&[Pos]>,
        accepts_moves: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_cells(&painter, snapshot);

        if let Some(pos) = snapshot.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accepts_moves {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    self.draw_hover_preview(&painter, snapshot, board_pos);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw stones (with their move numbers) and forbidden markers
    fn draw_cells(&self, painter: &Painter, snapshot: &Snapshot) {
        for pos in Pos::all() {
            let Some(cell) = snapshot.board.cell(pos) else {
                continue;
            };
            match cell.status {
                CellStatus::Black | CellStatus::White => {
                    self.draw_stone(painter, pos, cell.status, cell.counter);
                }
                CellStatus::Forbidden => self.draw_forbidden(painter, pos),
                CellStatus::Blank | CellStatus::Edge => {}
            }
        }
    }

    /// Draw a single stone labelled with its move number
    fn draw_stone(&self, painter: &Painter, pos: Pos, status: CellStatus, counter: i32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        let label_color = match status {
            CellStatus::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_stroke(center, radius * 0.9, Stroke::new(1.0, BLACK_STONE_HIGHLIGHT));
                WHITE_STONE
            }
            CellStatus::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
                BLACK_STONE
            }
            _ => return,
        };

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            counter.to_string(),
            egui::FontId::proportional(self.cell_size * 0.35),
            label_color,
        );
    }

    fn draw_forbidden(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * FORBIDDEN_RADIUS_RATIO;
        let rect = Rect::from_center_size(center, Vec2::splat(half * 2.0));
        painter.rect_filled(rect, CornerRadius::same(2), FORBIDDEN_MARKER);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let offset = Vec2::new(self.cell_size * 0.3, -self.cell_size * 0.3);
        painter.circle_filled(center + offset, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Ghost stone for the side to move, red over forbidden or taken cells
    fn draw_hover_preview(&self, painter: &Painter, snapshot: &Snapshot, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match snapshot.board.status(pos) {
            CellStatus::Blank => match snapshot.next_color() {
                Color::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Color::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            },
            _ => hover_invalid(),
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a board cell.
    ///
    /// Taps more than a third of a cell away from any intersection are
    /// ambiguous and resolve to nothing.
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let fx = (relative.x - BOARD_MARGIN) / self.cell_size;
        let fy = (relative.y - BOARD_MARGIN) / self.cell_size;

        let x = fx.round();
        let y = fy.round();
        if (fx - x).abs() > 0.35 || (fy - y).abs() > 0.35 {
            return None;
        }

        let pos = Pos::new(x as i32, y as i32);
        pos.is_valid().then_some(pos)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
