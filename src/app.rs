// src/app.rs

use mirage_scanner::core::models::{ScanReport, Vulnerability};
use mirage_scanner::service::ScanOutcome;
use ratatui::widgets::ListState;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

/// Which pane the report area shows once a scan has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Findings,
    Technical,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub scan_report: Option<ScanReport>,
    /// Last validation error, shown until the next scan starts.
    pub error: Option<String>,
    /// Status line about history persistence.
    pub notice: Option<String>,
    pub show_disclaimer: bool,
    pub tab: ReportTab,
    pub analysis_list_state: ListState,
    pub spinner_frame: usize,
    /// Animated towards the real score on each tick.
    pub displayed_score: u8,
    pub technical_scroll: u16,
}

impl App {
    pub fn new(show_disclaimer: bool) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            scan_report: None,
            error: None,
            notice: None,
            show_disclaimer,
            tab: ReportTab::Findings,
            analysis_list_state: ListState::default(),
            spinner_frame: 0,
            displayed_score: 0,
            technical_scroll: 0,
        }
    }

    pub fn start_scan(&mut self) {
        self.state = AppState::Scanning;
        self.error = None;
        self.notice = None;
    }

    pub fn finish_scan(&mut self, outcome: ScanOutcome) {
        self.notice = match (&outcome.saved_as, &outcome.save_error) {
            (Some(_), _) => Some("Saved to scan history.".to_string()),
            (None, Some(e)) => Some(format!("Could not save scan: {e}")),
            (None, None) => None,
        };
        let has_findings = !outcome.report.vulnerabilities.is_empty();
        self.scan_report = Some(outcome.report);
        self.analysis_list_state.select(if has_findings { Some(0) } else { None });
        self.displayed_score = 0;
        self.tab = ReportTab::Findings;
        self.technical_scroll = 0;
        self.state = AppState::Finished;
    }

    pub fn fail_scan(&mut self, message: String) {
        self.error = Some(message);
        self.state = AppState::Idle;
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        self.scan_report.as_ref().map(|r| r.vulnerabilities.as_slice()).unwrap_or(&[])
    }

    pub fn scroll_up(&mut self) {
        match self.tab {
            ReportTab::Findings => {
                let selected = self.analysis_list_state.selected().unwrap_or(0);
                self.analysis_list_state.select(Some(selected.saturating_sub(1)));
            }
            ReportTab::Technical => self.technical_scroll = self.technical_scroll.saturating_sub(1),
        }
    }

    pub fn scroll_down(&mut self) {
        match self.tab {
            ReportTab::Findings => {
                let len = self.vulnerabilities().len();
                if len == 0 {
                    return;
                }
                let next = self.analysis_list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
                self.analysis_list_state.select(Some(next));
            }
            ReportTab::Technical => self.technical_scroll = self.technical_scroll.saturating_add(1),
        }
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            ReportTab::Findings => ReportTab::Technical,
            ReportTab::Technical => ReportTab::Findings,
        };
    }

    pub fn on_tick(&mut self) {
        match self.state {
            AppState::Scanning => self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len(),
            AppState::Finished => {
                if let Some(report) = &self.scan_report {
                    if self.displayed_score < report.security_score {
                        self.displayed_score = (self.displayed_score + 2).min(report.security_score);
                    }
                }
            }
            AppState::Idle => {}
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.scan_report = None;
        self.error = None;
        self.notice = None;
        self.tab = ReportTab::Findings;
        self.analysis_list_state = ListState::default();
        self.displayed_score = 0;
        self.technical_scroll = 0;
    }
}
