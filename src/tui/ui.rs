//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Player, Position, Square, Win};

const HELP: &str = "arrows: move  enter: play/jump  0-8: play  tab: switch pane  o: sort  q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board_pane(frame, panes[0], app);
    draw_moves(frame, panes[1], app);

    let mut status = vec![Span::styled(
        app.engine().status_text(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(message) = app.message() {
        status.push(Span::raw("  "));
        status.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    }
    let status = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board_pane(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(1)])
        .split(inner);

    let board_area = center_rect(parts[0], 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let win = app.engine().winner();
    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, app, win.as_ref(), row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    let toggle = Paragraph::new(format!("[o] {}", app.engine().order_toggle_label()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(toggle, parts[1]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, win: Option<&Win>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[col * 2], app, win, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, win: Option<&Win>, pos: Position) {
    let square = app.engine().current_snapshot().board().get(pos);

    let (symbol, mut style) = match square {
        Square::Empty => (format!(" {} ", pos.to_index()), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if win.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == app.cursor() && app.focus() == Focus::Board {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = app
        .engine()
        .move_list()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{:>2}. {}", entry.step, entry.description),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Moves", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_move_list() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('4'));

        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1 (1, 1)"));
        assert!(screen.contains("Sort moves in descending order"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::default();
        for key in ['0', '3', '1', '4', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(render(&app).contains("Winner: X"));
    }
}
