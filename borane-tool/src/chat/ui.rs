use borane_widget::{ReplyMode, Sender, WidgetState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::ChatApp;

const SEND_BUTTON_WIDTH: u16 = 10;

pub fn render(frame: &mut Frame, app: &mut ChatApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Messages
            Constraint::Length(3), // Input + send
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .split(chunks[2]);

    render_header(frame, app, chunks[0]);
    render_messages(frame, app, chunks[1]);
    render_input(frame, app, input_row[0]);
    render_send_button(frame, app, input_row[1]);
    render_status_bar(frame, app, chunks[3]);

    app.send_button = Some(input_row[1]);
}

fn render_header(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let mode = match app.widget.reply_mode() {
        ReplyMode::Canned => format!("canned replies, {}ms", app.widget.reply_delay().as_millis()),
        ReplyMode::External => "backend".to_string(),
    };

    let header = Paragraph::new(format!("bh chat - {}", mode))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn render_messages(frame: &mut Frame, app: &mut ChatApp, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for msg in app.widget.log().messages() {
        let style = match msg.sender() {
            Sender::User => Style::default().fg(Color::Green),
            Sender::Bot => Style::default().fg(Color::Blue),
        };

        lines.push(Line::from(Span::styled(
            format!("{}:", msg.sender().label()),
            style.add_modifier(Modifier::BOLD),
        )));
        for line in msg.text().lines() {
            lines.push(Line::from(format!("  {}", line)));
        }
        lines.push(Line::from(""));
    }

    if let WidgetState::AwaitingReply(n) = app.widget.state() {
        let text = if n == 1 {
            "AI is typing...".to_string()
        } else {
            format!("AI is typing... ({} pending)", n)
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )));
    }

    let text = Text::from(lines);

    // Count rows after wrapping so the newest line stays visible
    let inner_width = area.width.saturating_sub(2);
    let visible_height = area.height.saturating_sub(2) as usize;
    let total_rows = Paragraph::new(text.clone())
        .wrap(Wrap { trim: false })
        .line_count(inner_width);
    let max_scroll = total_rows.saturating_sub(visible_height);

    app.widget.clamp_scroll(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    let scroll = max_scroll.saturating_sub(app.widget.log().scroll() as usize);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Chat"))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let input = app.widget.input();
    let input_block = Block::default().borders(Borders::ALL).title("Message");

    let (display_text, style) = if input.is_empty() {
        (
            "Type your message here...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (input.text().to_string(), Style::default())
    };

    let input_paragraph = Paragraph::new(display_text).style(style).block(input_block);
    frame.render_widget(input_paragraph, area);

    let cursor_x = area.x + 1 + input.cursor_column() as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn render_send_button(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let style = if app.widget.input().text().trim().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new("Send")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(button, area);
}

fn render_status_bar(frame: &mut Frame, _app: &ChatApp, area: Rect) {
    let status = "Enter/click Send: Send  PgUp/PgDn: Scroll  Esc: Quit";
    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
