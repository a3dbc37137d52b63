// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use mirage_scanner::core::models::RiskLevel;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Renders the summary widget: score, gauge, risk level, issue counts and technologies.
///
/// Content only appears once a scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Score & rating
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Risk level
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Issues found
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Scan metadata
            Constraint::Min(0),    // Technologies
        ])
        .split(area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }
    let Some(report) = &app.scan_report else {
        return;
    };

    // --- Score & Rating ---
    let (rating_text, rating_style) = match report.security_score {
        90..=100 => ("Excellent", Style::default().fg(Color::Green)),
        75..=89 => ("Good", Style::default().fg(Color::Cyan)),
        50..=74 => ("Needs Improvement", Style::default().fg(Color::Yellow)),
        _ => ("Poor", Style::default().fg(Color::Red)),
    };
    let score_line = Line::from(format!("{}/100 ({})", report.security_score, rating_text)).style(rating_style);
    let score_text = Text::from(vec![Line::from("Security Score".bold()), score_line]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    // --- Gauge (animated) ---
    let score_gauge = Gauge::default()
        .percent(app.displayed_score as u16)
        .label("")
        .style(Style::default().fg(if app.displayed_score >= 80 {
            Color::Green
        } else if app.displayed_score >= 50 {
            Color::Yellow
        } else {
            Color::Red
        }));
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Risk Level ---
    let risk_color = match report.risk_level {
        RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    };
    let risk = Text::from(vec![
        Line::from("RISK LEVEL".bold()),
        Line::from(Span::styled(report.risk_level.to_string(), Style::default().fg(risk_color).bold())),
    ]);
    frame.render_widget(Paragraph::new(risk), summary_chunks[3]);

    // --- Issues Found ---
    let issues_block = Block::default().title("ISSUES FOUND".bold());
    let counts = report.vulnerabilities_summary;
    let details_text = Text::from(vec![
        Line::from(vec![Span::raw("High:   "), Span::styled(counts.high.to_string(), Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("Medium: "), Span::styled(counts.medium.to_string(), Style::default().fg(Color::Yellow))]),
        Line::from(vec![Span::raw("Low:    "), Span::styled(counts.low.to_string(), Style::default().fg(Color::Cyan))]),
    ]);
    frame.render_widget(Paragraph::new(details_text).block(issues_block), summary_chunks[5]);

    // --- Scan Metadata ---
    let meta = Text::from(vec![
        Line::from(vec!["Date: ".bold(), Span::raw(report.scan_date.as_str())]),
        Line::from(vec!["Duration: ".bold(), Span::raw(report.scan_duration.as_str())]),
        Line::from(app.notice.as_deref().unwrap_or("").fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(meta), summary_chunks[7]);

    // --- Technologies ---
    let tech_block = Block::default().title("TECHNOLOGIES".bold());
    let tech_lines: Vec<Line> = report
        .technical_details
        .technologies
        .iter()
        .map(|tech| Line::from(vec![Span::raw("- "), Span::styled(tech.as_str(), Style::default().fg(Color::Cyan))]))
        .collect();
    frame.render_widget(Paragraph::new(tech_lines).block(tech_block), summary_chunks[8]);
}
