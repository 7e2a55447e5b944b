//! Board pane: one terminal cell per board cell

use crate::board::Board;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// Draws a [`Board`] with its top-left cell at the area's top-left corner.
///
/// Every cell inside the area is rewritten: the live glyph for live cells,
/// a blank for dead ones. Board cells past the area edge are clipped.
pub struct BoardWidget<'a> {
    board: &'a Board,
    glyph: char,
    style: Style,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardWidget {
            board,
            glyph: crate::board::LIVE_CHAR,
            style: Style::default()
                .fg(DEFAULT_THEME.live_cell)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut encoded = [0u8; 4];
        let live: &str = self.glyph.encode_utf8(&mut encoded);

        let rows = (area.height as usize).min(self.board.height());
        let cols = (area.width as usize).min(self.board.width());

        for (y, row) in self.board.rows().take(rows).enumerate() {
            for (x, &alive) in row.iter().take(cols).enumerate() {
                let (symbol, style) = if alive {
                    (live, self.style)
                } else {
                    (" ", Style::default())
                };
                buf.set_string(area.x + x as u16, area.y + y as u16, symbol, style);
            }
        }
    }
}
