// src/ui/widgets/technical_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the synthetic HTTP headers, open ports and DNS records.
pub fn render_technical_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Technical Details (scroll with ↑ ↓)");

    let Some(report) = &app.scan_report else {
        frame.render_widget(block, area);
        return;
    };
    let details = &report.technical_details;

    let mut lines = vec![Line::from("HTTP HEADERS".yellow().bold())];
    lines.extend(details.headers.lines().map(Line::from));

    lines.push(Line::from(""));
    lines.push(Line::from("OPEN PORTS".yellow().bold()));
    lines.extend(details.ports.iter().map(|port| {
        Line::from(vec![
            Span::styled(format!("{:>6}/tcp  ", port.number), Style::default().fg(Color::Cyan)),
            Span::raw(port.service.as_str()),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from("DNS".yellow().bold()));
    lines.extend(details.dns.lines().map(Line::from));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.technical_scroll, 0));
    frame.render_widget(paragraph, area);
}
