// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use mirage_scanner::core::models::{Recommendation, ScanReport, Severity, Vulnerability};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::High => Style::default().fg(Color::Red),
        Severity::Medium => Style::default().fg(Color::Yellow),
        Severity::Low => Style::default().fg(Color::Cyan),
    }
}

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Findings (Navigate with ↑ ↓)");

    if !matches!(app.state, AppState::Finished) {
        let content = match app.state {
            AppState::Idle => match &app.error {
                Some(message) => Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true }),
                None => Paragraph::new("Enter a URL and press Enter. Results will appear here...")
                    .alignment(Alignment::Center),
            },
            AppState::Scanning => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame];
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                    Span::raw("Scanning... Please wait."),
                ]))
                .alignment(Alignment::Center)
            }
            AppState::Finished => Paragraph::new(""),
        };
        frame.render_widget(content.block(main_block), area);
        return;
    }

    let Some(report) = app.scan_report.as_ref() else {
        return;
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Min(0)])
        .split(inner_area);

    let items: Vec<ListItem> = report
        .vulnerabilities
        .iter()
        .map(|v| {
            let tag = format!("[{}] ", v.severity.to_string().to_uppercase());
            ListItem::new(Line::from(vec![
                Span::styled(tag, severity_style(v.severity).bold()),
                Span::raw(v.name.clone()),
            ]))
        })
        .collect();

    let findings_list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let detail_text = app
        .analysis_list_state
        .selected()
        .and_then(|i| report.vulnerabilities.get(i).map(|v| detail_lines(v, report.recommendation_for(i))))
        .unwrap_or_else(|| general_advice_lines(report));
    let details = Paragraph::new(detail_text).wrap(Wrap { trim: false }).block(detail_block);

    frame.render_stateful_widget(findings_list, chunks[0], &mut app.analysis_list_state);
    frame.render_widget(details, chunks[1]);
}

fn detail_lines<'a>(vuln: &'a Vulnerability, recommendation: Option<&'a Recommendation>) -> Text<'a> {
    let mut lines = vec![
        Line::from("WHAT IT IS:".yellow().bold()),
        Line::from(vuln.description.as_str()),
        Line::from(""),
        Line::from(vec!["Location: ".bold(), Span::raw(vuln.location.as_str())]),
    ];
    if let Some(evidence) = &vuln.evidence {
        lines.push(Line::from(vec!["Evidence: ".bold(), Span::raw(evidence.as_str())]));
    }
    if let Some(cvss) = &vuln.cvss {
        lines.push(Line::from(vec![
            "CVSS: ".bold(),
            Span::styled(cvss.as_str(), severity_style(vuln.severity)),
        ]));
    }
    if let Some(rec) = recommendation {
        lines.push(Line::from(""));
        lines.push(Line::from("HOW TO FIX:".yellow().bold()));
        lines.extend(recommendation_lines(rec));
    }
    Text::from(lines)
}

fn recommendation_lines(rec: &Recommendation) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(rec.title.as_str().bold()), Line::from(rec.description.as_str())];
    if let Some(code) = &rec.code {
        lines.push(Line::from(""));
        lines.extend(code.lines().map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Green)))));
    }
    if let Some(resources) = &rec.resources {
        lines.push(Line::from(""));
        lines.extend(resources.iter().map(|r| Line::from(format!("  • {r}")).fg(Color::DarkGray)));
    }
    lines
}

/// Shown when nothing is selected: the generic recommendations appended after the findings.
fn general_advice_lines(report: &ScanReport) -> Text<'_> {
    let mut lines = vec![Line::from("GENERAL ADVICE".bold())];
    for rec in report.recommendations.iter().skip(report.vulnerabilities.len()) {
        lines.push(Line::from(""));
        lines.extend(recommendation_lines(rec));
    }
    if lines.len() == 1 {
        lines.push(Line::from("Select an item above to see details."));
    }
    Text::from(lines)
}
