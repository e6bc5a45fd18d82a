use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::session::Session;
use crate::ui::layout::split_even;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Question { played: bool },
    Empty,
}

/// Classifies one board slot. Slots without a matching record stay on the
/// board as inert placeholders so the grid keeps its rectangular shape.
pub fn cell_state(session: &Session, category: &str, difficulty: u32) -> CellState {
    match session.find(category, difficulty) {
        Some(record) => CellState::Question {
            played: record.played,
        },
        None => CellState::Empty,
    }
}

fn fit_label(text: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

pub struct BoardGrid<'a> {
    pub session: &'a Session,
    pub ladder: &'a [u32],
    /// (column, row) into categories × ladder.
    pub cursor: (usize, usize),
    pub theme: &'a Theme,
}

impl<'a> BoardGrid<'a> {
    pub fn new(
        session: &'a Session,
        ladder: &'a [u32],
        cursor: (usize, usize),
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            ladder,
            cursor,
            theme,
        }
    }

    fn paint_cell(&self, buf: &mut Buffer, cell: Rect, label: &str, style: Style) {
        // Leave a one-cell gutter right and below so neighboring cards with
        // the same color stay distinguishable.
        let width = if cell.width > 1 { cell.width - 1 } else { cell.width };
        let height = if cell.height > 1 { cell.height - 1 } else { cell.height };
        if width == 0 || height == 0 {
            return;
        }

        for y in cell.y..cell.y + height {
            for x in cell.x..cell.x + width {
                buf[(x, y)].set_style(style);
            }
        }

        let display = fit_label(label, width);
        let label_x = cell.x + (width.saturating_sub(display.chars().count() as u16)) / 2;
        let label_y = cell.y + height / 2;
        buf.set_string(label_x, label_y, &display, style);
    }
}

impl Widget for BoardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Board ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let categories = self.session.categories();
        if inner.width == 0 || inner.height == 0 || categories.is_empty() {
            return;
        }

        let columns = split_even(inner.width, categories.len());
        let rows = split_even(inner.height, 1 + self.ladder.len());

        // Header row: one colored cell per category.
        let (header_y, header_h) = rows[0];
        for (col, category) in categories.iter().enumerate() {
            let (x, w) = columns[col];
            let cell = Rect::new(inner.x + x, inner.y + header_y, w, header_h);
            let style = Style::default()
                .fg(colors.card_fg())
                .bg(colors.category_color(col))
                .add_modifier(Modifier::BOLD);
            self.paint_cell(buf, cell, category, style);
        }

        // Question cards, one ladder row at a time.
        for (row, &difficulty) in self.ladder.iter().enumerate() {
            let (y, h) = rows[1 + row];
            for (col, category) in categories.iter().enumerate() {
                let state = cell_state(self.session, category, difficulty);
                if state == CellState::Empty {
                    continue;
                }

                let (x, w) = columns[col];
                let cell = Rect::new(inner.x + x, inner.y + y, w, h);

                let is_cursor = self.cursor == (col, row);
                let style = if is_cursor {
                    Style::default()
                        .fg(colors.cursor_fg())
                        .bg(colors.cursor_bg())
                        .add_modifier(Modifier::BOLD)
                } else if state == (CellState::Question { played: true }) {
                    Style::default().fg(colors.played_fg()).bg(colors.played_bg())
                } else {
                    Style::default().fg(colors.card_fg()).bg(colors.category_color(col))
                };

                self.paint_cell(buf, cell, &difficulty.to_string(), style);
            }
        }
    }
}
