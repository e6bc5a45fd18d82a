use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::timer::TimerDisplay;
use crate::ui::theme::Theme;

pub struct Countdown<'a> {
    pub display: TimerDisplay,
    pub total_secs: u32,
    pub theme: &'a Theme,
}

impl<'a> Countdown<'a> {
    pub fn new(display: TimerDisplay, total_secs: u32, theme: &'a Theme) -> Self {
        Self {
            display,
            total_secs,
            theme,
        }
    }
}

impl Widget for Countdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Countdown ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self.display {
            TimerDisplay::Idle => {
                let hint = "press t to start";
                buf.set_string(
                    inner.x + 1,
                    inner.y,
                    hint,
                    Style::default().fg(colors.text_dim()),
                );
            }
            TimerDisplay::Remaining(secs) => {
                let ratio = if self.total_secs == 0 {
                    0.0
                } else {
                    f64::from(secs) / f64::from(self.total_secs)
                };
                let filled_width = (ratio * f64::from(inner.width)) as u16;
                let bar_color = if secs <= 3 {
                    colors.warning()
                } else {
                    colors.bar_filled()
                };

                for x in inner.x..inner.x + inner.width {
                    let style = if x < inner.x + filled_width {
                        Style::default().fg(colors.bg()).bg(bar_color)
                    } else {
                        Style::default().fg(colors.fg()).bg(colors.bar_empty())
                    };
                    buf[(x, inner.y)].set_style(style);
                }

                let label = format!("{secs}s");
                let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
                buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
            }
            TimerDisplay::Expired { on } => {
                // The alert alternates between a filled banner and a dim
                // label until the question is closed.
                if on {
                    let style = Style::default()
                        .fg(colors.bg())
                        .bg(colors.error())
                        .add_modifier(Modifier::BOLD);
                    for x in inner.x..inner.x + inner.width {
                        buf[(x, inner.y)].set_style(style);
                    }
                    let label = "TIME'S UP";
                    let label_x =
                        inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
                    buf.set_string(label_x, inner.y, label, style);
                } else {
                    let label = "TIME'S UP";
                    let label_x =
                        inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
                    buf.set_string(
                        label_x,
                        inner.y,
                        label,
                        Style::default().fg(colors.text_dim()),
                    );
                }
            }
        }
    }
}
