// src/ui/mod.rs

use crate::app::{App, ReportTab};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::input::render_input(frame, app, layout.input);

    // The report area shows either the findings or the technical profile.
    match app.tab {
        ReportTab::Findings => widgets::analysis_view::render_analysis_view(frame, app, layout.report),
        ReportTab::Technical => widgets::technical_view::render_technical_view(frame, app, layout.report),
    }

    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.show_disclaimer {
        widgets::disclaimer_popup::render_disclaimer_popup(frame, area);
    }
}
