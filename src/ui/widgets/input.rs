// src/ui/widgets/input.rs
use crate::app::{App, AppState};
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders the input box widget.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default().borders(Borders::ALL).title("Target URL");
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Show the cursor only while typing.
    if matches!(app.state, AppState::Idle) && !app.show_disclaimer {
        let x = cursor_column(area, app.input.chars().count());
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

/// Column just past the typed text, kept inside the box borders.
fn cursor_column(area: Rect, typed: usize) -> u16 {
    let last_inner = area.width.saturating_sub(2).saturating_sub(1);
    let offset = u16::try_from(typed).unwrap_or(u16::MAX).min(last_inner);
    area.x.saturating_add(1).saturating_add(offset)
}
