// src/main.rs

use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use mirage_scanner::config::Settings;
use mirage_scanner::core::error::ScanError;
use mirage_scanner::logging::initialize_logging;
use mirage_scanner::service::{ScanOutcome, ScanService};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod cli;
mod ui;

use app::{App, AppState};

type ScanMessage = Result<ScanOutcome, ScanError>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::parse();
    initialize_logging()?;

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings);
    info!(?settings, "Settings resolved.");
    let service = ScanService::from_settings(&settings);

    if args.history {
        return print_history(&service, &settings);
    }
    if args.json {
        let url = args.url.as_deref().ok_or_else(|| eyre!("--json requires a URL to scan"))?;
        let outcome = service.scan_url(url).await?;
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
        if let Some(e) = outcome.save_error {
            eprintln!("warning: scan not saved: {e}");
        }
        return Ok(());
    }

    let mut app = App::new(settings.show_disclaimer);
    if let Some(url) = args.url {
        app.input = url;
    }
    run_tui(&mut app, service).await
}

fn print_history(service: &ScanService, settings: &Settings) -> Result<()> {
    if service.user_id().is_none() {
        return Err(eyre!("scan history requires --user or user_id in the config file"));
    }
    let records = service.fetch_history()?;
    info!(count = records.len(), "History loaded.");
    if records.is_empty() {
        println!("No saved scans in {}.", settings.history_path().display());
    }
    for record in records {
        println!(
            "{}  {:<40} score {:>3}  risk {:<6}  high {} / medium {} / low {}  ({})",
            record.id,
            record.url,
            record.security_score,
            record.risk_level,
            record.vulnerabilities_count.high,
            record.vulnerabilities_count.medium,
            record.vulnerabilities_count.low,
            record.scan_date
        );
    }
    Ok(())
}

async fn run_tui(app: &mut App, service: ScanService) -> Result<()> {
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let (tx, mut rx) = mpsc::channel::<ScanMessage>(1);
    let result = event_loop(&mut terminal, app, &service, &tx, &mut rx).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    service: &ScanService,
    tx: &mpsc::Sender<ScanMessage>,
    rx: &mut mpsc::Receiver<ScanMessage>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(app, service, tx)?;
        }

        if let Ok(message) = rx.try_recv() {
            match message {
                Ok(outcome) => app.finish_scan(outcome),
                Err(e) => {
                    error!(error = %e, "Scan rejected.");
                    app.fail_scan(e.to_string());
                }
            }
        }

        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, service: &ScanService, tx: &mpsc::Sender<ScanMessage>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if app.show_disclaimer {
            match key.code {
                KeyCode::Enter => app.show_disclaimer = false,
                KeyCode::Char('q') => app.quit(),
                _ => {}
            }
            return Ok(());
        }
        match app.state {
            AppState::Idle => handle_idle_input(app, key.code, service, tx),
            AppState::Finished => handle_finished_input(app, key.code),
            AppState::Scanning => {
                if key.code == KeyCode::Char('q') {
                    app.quit();
                }
            }
        }
    }
    Ok(())
}

fn handle_idle_input(app: &mut App, key_code: KeyCode, service: &ScanService, tx: &mpsc::Sender<ScanMessage>) {
    match key_code {
        KeyCode::Char('q') if app.input.is_empty() => app.quit(),
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            if app.input.trim().is_empty() {
                return;
            }
            app.start_scan();
            let tx = tx.clone();
            let service = service.clone();
            let raw_input = app.input.clone();
            tokio::spawn(async move {
                let message = service.scan_url(&raw_input).await;
                let _ = tx.send(message).await;
            });
        }
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Tab => app.toggle_tab(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
