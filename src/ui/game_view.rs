use crate::game::{Board, Cell, GameOutcome, Mode, Player, Session};
use crate::highscores::HighscoreStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SCORES_WIDTH: u16 = 28;

pub fn render(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + highscores
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SCORES_WIDTH)])
        .split(chunks[1]);

    render_header(frame, session, chunks[0]);
    render_board(frame, session.board(), session.mode(), selected_column, body[0]);
    render_highscores(frame, session.highscores(), body[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn colour_of(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let player = session.player();
    let who = match player.name() {
        Some(name) => format!("{} ({})", name, player.colour().name()),
        None => player.colour().name().to_string(),
    };
    let mode = match session.mode() {
        Mode::Classic => "Classic",
        Mode::Breakfast => "Breakfast",
    };

    let status = match session.outcome() {
        Some(GameOutcome::Win) => "You won".to_string(),
        Some(GameOutcome::Lose) => "You lost".to_string(),
        Some(GameOutcome::Draw) => "Draw".to_string(),
        None => format!("Score: {}", player.score()),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("You: {}", who),
            Style::default()
                .fg(colour_of(player.colour()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{}: {}", session.agent_name(), session.computer_colour().name()),
            Style::default().fg(colour_of(session.computer_colour())),
        ),
        Span::raw(format!("  |  {}  |  {}", status, mode)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Connect Four"),
    );

    frame.render_widget(header, area);
}

fn token(cell: Cell, mode: Mode) -> (&'static str, Color) {
    match (cell, mode) {
        (Cell::Empty, _) => (" . ", Color::DarkGray),
        (Cell::Red, Mode::Classic) => (" ● ", Color::Red),
        (Cell::Yellow, Mode::Classic) => (" ● ", Color::Yellow),
        // bacon and fried egg
        (Cell::Red, Mode::Breakfast) => (" ≡ ", Color::LightRed),
        (Cell::Yellow, Mode::Breakfast) => (" ◉ ", Color::LightYellow),
    }
}

fn render_board(frame: &mut Frame, board: &Board, mode: Mode, selected_column: usize, area: Rect) {
    let cols = board.cols();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{}╗", rule)));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let (symbol, color) = token(board.get(row, col), mode);
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", rule)));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_highscores(frame: &mut Frame, store: Option<&HighscoreStore>, area: Rect) {
    let lines: Vec<Line> = match store {
        None => vec![Line::from("(disabled)")],
        Some(store) if store.ranked_entries().is_empty() => vec![Line::from("(none yet)")],
        Some(store) => store
            .ranked_entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::Cyan)),
                    Span::raw(format!("{:<16}", entry.name)),
                    Span::styled(
                        format!("{:>4}", entry.score),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect(),
    };

    let table = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Highscores"),
    );
    frame.render_widget(table, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  B: Breakfast  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::raw("R: Restart  |  "),
        Span::styled("1", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(": Restart as Red  |  "),
        Span::styled("2", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(": Restart as Yellow"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
