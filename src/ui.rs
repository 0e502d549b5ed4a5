use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;
use wordrush::{Cursor, LetterStatus, SessionEngine, WordSlot, WordStatus};

use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Typing => render_typing(&self.session, area, buf),
            AppState::Results => render_results(&self.session, area, buf),
        }
    }
}

fn render_typing(session: &SessionEngine, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);

    let prompt = session
        .words()
        .iter()
        .map(WordSlot::text)
        .collect::<Vec<_>>()
        .join(" ");

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let prompt_occupied_lines = if prompt.width() <= max_chars_per_line as usize {
        1
    } else {
        ((prompt.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
    };

    let padding = area.height.saturating_sub(prompt_occupied_lines + 2) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(padding),
            Constraint::Length(2),
            Constraint::Length(prompt_occupied_lines),
            Constraint::Min(0),
        ])
        .split(area);

    let header = if session.is_idle() {
        format!("{}s - start typing", session.time_remaining())
    } else {
        session.time_remaining().to_string()
    };
    Paragraph::new(Span::styled(header, dim_bold_style))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let spans = word_spans(session);
    Paragraph::new(Line::from(spans))
        .alignment(if prompt_occupied_lines == 1 {
            // when the prompt is small enough to fit on one line
            // centering the text gives a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);
}

/// One span per letter plus one per separating space, styled from the session state
fn word_spans(session: &SessionEngine) -> Vec<Span<'static>> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);

    let cursor: Option<Cursor> = session.is_running().then(|| session.cursor());
    let mut spans = Vec::new();

    for (word_index, word) in session.words().iter().enumerate() {
        let marked = word.status() == WordStatus::CompletedMarked;

        for (letter_index, letter) in word.letters().iter().enumerate() {
            let mut style = match letter.status {
                LetterStatus::Correct => green_bold_style,
                LetterStatus::Incorrect => red_bold_style,
                LetterStatus::Pending => dim_bold_style,
            };
            if marked {
                style = style.add_modifier(Modifier::UNDERLINED).fg(Color::Red);
            }
            if cursor
                == Some(Cursor {
                    word_index,
                    letter_index,
                })
            {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
            }
            spans.push(Span::styled(letter.expected.to_string(), style));
        }

        // a full word parks the cursor on the following space
        let waiting_for_space = cursor
            == Some(Cursor {
                word_index,
                letter_index: word.len(),
            });
        spans.push(if waiting_for_space {
            Span::styled("·", dim_bold_style.add_modifier(Modifier::REVERSED))
        } else {
            Span::raw(" ")
        });
    }

    spans
}

fn render_results(session: &SessionEngine, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // stats
            Constraint::Length(1), // breakdown
            Constraint::Length(1), // padding
            Constraint::Length(1), // legend
            Constraint::Min(0),
        ])
        .split(area);

    let Some(score) = session.score() else {
        return;
    };

    Paragraph::new(Span::styled(
        format!(
            "{} wpm   {:.2}% acc",
            score.words_per_minute, score.accuracy
        ),
        bold_style,
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    Paragraph::new(Span::styled(
        format!(
            "{} correct words   {} correct / {} wrong letters",
            score.correct_words, score.correct_letters, score.incorrect_letters
        ),
        Style::default().fg(Color::Cyan),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);

    Paragraph::new(Span::styled("(r)etry / (n)ew / (esc)ape", italic_style))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
}
