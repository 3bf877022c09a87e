use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};
use taskbot_core::{to_display_text, TaskKind};

use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("TASKBOT")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(main_chunks[1]);

    draw_task_list(f, app, content_chunks[0]);
    draw_conversation(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    let footer = Paragraph::new("Enter: Send | Up/Down: Navigate | Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app.session.tasks().tasks().iter().enumerate().map(|(i, task)| {
        let status_icon = if task.is_done() { "✔" } else { "☐" };

        let (kind_style, when) = match task.kind() {
            TaskKind::Todo => (Style::default().fg(Color::Green), String::new()),
            TaskKind::Deadline { due } => (
                Style::default().fg(Color::Red),
                format!("by {}", to_display_text(due)),
            ),
            TaskKind::Event { start, end } => (
                Style::default().fg(Color::Yellow),
                format!("{} - {}", to_display_text(start), to_display_text(end)),
            ),
        };

        Row::new(vec![
            Span::raw((i + 1).to_string()),
            Span::styled(status_icon, Style::default()),
            Span::styled(task.kind().tag(), kind_style),
            Span::styled(task.name().to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(when),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),  // Number
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Kind
            Constraint::Min(10),    // Name
            Constraint::Length(34), // When
        ]
    )
    .header(
        Row::new(vec!["#", "St", "Ty", "Task", "When"]).style(Style::default().fg(Color::Yellow)),
    )
    .block(rounded(" Tasks "))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_conversation(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for exchange in &app.conversation {
        if !exchange.input.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("> {}", exchange.input),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
        }
        for text in exchange.response.lines() {
            lines.push(Line::from(text.to_string()));
        }
        lines.push(Line::from(""));
    }

    // Stick to the bottom of the conversation.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = lines.len().saturating_sub(visible) as u16;

    let conversation = Paragraph::new(lines)
        .block(rounded(" Conversation "))
        .scroll((offset, 0));
    f.render_widget(conversation, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input.as_str()).block(rounded(" Command "));
    f.render_widget(input, area);

    f.set_cursor_position((area.x + 1 + app.cursor_position as u16, area.y + 1));
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}
