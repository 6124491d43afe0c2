//! TUI rendering with ratatui
//!
//! The view reads the session and never changes it.

use super::app::App;
use crate::core::LetterStatus;
use crate::game::{Board, COLUMNS, KeyboardTracker, LAYOUT, Phase, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D, S>(f: &mut Frame, app: &App<D, S>)
where
    D: crate::dictionary::Dictionary,
    S: crate::store::KeyValueStore,
{
    let session = &app.session;

    #[allow(clippy::cast_possible_truncation)]
    let grid_height = (ROWS * 2 + 1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Board
            Constraint::Length(5),           // Keyboard or message
            Constraint::Min(1),              // Status bar
        ])
        .split(f.area());

    render_header(f, session.streak(), session.record(), chunks[0]);
    render_board(f, session.board(), chunks[1]);

    match session.message() {
        Some(text) => render_message(f, text, session.phase(), chunks[2]),
        None => render_keyboard(f, session.keyboard(), chunks[2]),
    }

    render_status(f, session.phase(), chunks[3]);
}

fn status_style(status: LetterStatus) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Pending => style.fg(Color::White),
        LetterStatus::Outcast => style.fg(Color::White).bg(Color::DarkGray),
        LetterStatus::IllPositioned => style.fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Positioned => style.fg(Color::Black).bg(Color::Green),
    }
}

fn render_header(f: &mut Frame, streak: u32, record: u32, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "WADDLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   Streak: {streak}   Record: {record}")),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, board: &Board, area: Rect) {
    let highlighted = board.highlighted_cell();
    let mut lines = Vec::with_capacity(ROWS * 2);

    for (r, row) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(COLUMNS * 2);
        for (c, cell) in row.cells().iter().enumerate() {
            let mut style = status_style(cell.status);
            if highlighted.is_some_and(|cursor| cursor.row == r && cursor.column == c) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let letter = if cell.is_empty() && !row.is_locked() {
                '·'
            } else {
                cell.display_char()
            };
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardTracker, area: Rect) {
    let key_style = Style::default().fg(Color::Gray);
    let lines: Vec<Line> = LAYOUT
        .iter()
        .enumerate()
        .map(|(i, keys)| {
            let mut spans = Vec::new();
            if i == LAYOUT.len() - 1 {
                spans.push(Span::styled(" ENTER ", key_style));
            }
            for key in keys.chars() {
                spans.push(Span::styled(
                    format!(" {key} "),
                    status_style(keyboard.status_of(key)),
                ));
            }
            if i == LAYOUT.len() - 1 {
                spans.push(Span::styled(" ⌫ ", key_style));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(widget, area);
}

fn render_message(f: &mut Frame, text: &str, phase: Phase, area: Rect) {
    let color = match phase {
        Phase::InProgress => Color::Red,
        Phase::Won => Color::Green,
        Phase::Lost => Color::Yellow,
    };

    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Esc / Space to dismiss ")
                .style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, phase: Phase, area: Rect) {
    let help_text = if phase.is_over() {
        "Enter/Esc: Next game | Ctrl-C: Quit"
    } else {
        "Enter: Submit | ←/→: Move | 1-6: Copy row | Ctrl-C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::dictionary::LocalDictionary;
    use crate::game::GameSession;
    use crate::interactive::Action;
    use crate::store::MemoryStore;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn app() -> App<LocalDictionary, MemoryStore> {
        let dictionary =
            LocalDictionary::new(&words_from_slice(&["slate"]), words_from_slice(&["crane"]))
                .unwrap();
        App::new(GameSession::start(
            dictionary,
            MemoryStore::new(),
            SessionConfig::immediate(),
        ))
    }

    fn screen(app: &App<LocalDictionary, MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_header_and_keyboard() {
        let text = screen(&app());
        assert!(text.contains("WADDLE"));
        assert!(text.contains("Streak: 0"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("ENTER"));
    }

    #[test]
    fn typed_letters_appear_on_board() {
        let mut app = app();
        for c in "sla".chars() {
            app.handle_action(Action::Type(c));
        }
        let text = screen(&app);
        assert!(text.contains(" S   L   A "));
    }

    #[test]
    fn message_replaces_keyboard() {
        let mut app = app();
        for c in "xyzzy".chars() {
            app.handle_action(Action::Type(c));
        }
        app.handle_action(Action::Submit);

        let text = screen(&app);
        assert!(text.contains("NOT A WORD: XYZZY"));
        assert!(!text.contains("Keyboard"));
    }
}
