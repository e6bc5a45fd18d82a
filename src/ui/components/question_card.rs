use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::dataset::record::QuestionRecord;
use crate::timer::TimerDisplay;
use crate::ui::components::countdown::Countdown;
use crate::ui::theme::Theme;

pub struct QuestionCard<'a> {
    pub question: &'a QuestionRecord,
    pub revealed: bool,
    pub timer: TimerDisplay,
    pub countdown_secs: u32,
    pub theme: &'a Theme,
}

impl<'a> QuestionCard<'a> {
    pub fn new(
        question: &'a QuestionRecord,
        revealed: bool,
        timer: TimerDisplay,
        countdown_secs: u32,
        theme: &'a Theme,
    ) -> Self {
        Self {
            question,
            revealed,
            timer,
            countdown_secs,
            theme,
        }
    }
}

fn option_lines(question: &QuestionRecord) -> Vec<String> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| format!(" {}. {option}", index + 1))
        .collect()
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.question.category))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let options = option_lines(self.question);

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(2),
        ];
        if self.question.has_options() {
            constraints.push(Constraint::Length(options.len() as u16 + 1));
        }
        constraints.push(Constraint::Length(2));
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let points = Paragraph::new(Line::from(Span::styled(
            format!(" {} Punkte", self.question.difficulty),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )));
        points.render(layout[0], buf);

        let prompt = Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.question.prompt),
            Style::default().fg(colors.fg()),
        )))
        .wrap(Wrap { trim: true });
        prompt.render(layout[2], buf);

        let mut idx = 3;
        if self.question.has_options() {
            let lines: Vec<Line> = options
                .iter()
                .map(|option| {
                    Line::from(Span::styled(
                        option.as_str(),
                        Style::default().fg(colors.fg()),
                    ))
                })
                .collect();
            Paragraph::new(lines).render(layout[idx], buf);
            idx += 1;
        }

        let solution = if self.revealed {
            Paragraph::new(Line::from(vec![
                Span::styled(
                    " Answer: ",
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.question.solution.as_str(),
                    Style::default().fg(colors.success()),
                ),
            ]))
            .wrap(Wrap { trim: true })
        } else {
            Paragraph::new(Line::from(Span::styled(
                " Answer hidden",
                Style::default().fg(colors.text_dim()),
            )))
        };
        solution.render(layout[idx], buf);
        idx += 1;

        Countdown::new(self.timer, self.countdown_secs, self.theme).render(layout[idx], buf);
        idx += 1;

        let hints = if self.revealed {
            " [t] Timer  [Esc] Close "
        } else {
            " [a] Reveal  [t] Timer  [Esc] Close "
        };
        let footer = Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(colors.text_dim()),
        )));
        footer.render(layout[idx], buf);
    }
}
