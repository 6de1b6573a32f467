use std::{io, time::Duration};

use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{App, Page},
    components::{
        HelperFooterControl, create_helper_footer, handle_profile_modal_input,
        render_profile_modal,
    },
    pages::{handle_directory_input, render_directory_page, render_help_page},
};

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod profile;
pub mod roster;

pub use app::{App as FolioApp, Page as FolioPage};
pub use config::AppConfig;
pub use error::{FolioError, FolioResult};
pub use roster::Roster;

pub fn run_tui() -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    let roster = config.resolve_roster()?;
    log::debug!("starting with {} profiles", roster.len());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let app = App::new(roster);
    let res = run_tui_loop(&mut terminal, &app);

    // Restore terminal on every exit path, including loop errors
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_tui_loop<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(app, key)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Draws one frame: title banner, active page, controls footer, and
/// the profile overlay when the selection machine is open.
pub fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // Title
            Constraint::Min(0),    // Main content
            Constraint::Length(4), // Footer/Help
        ])
        .split(f.area());

    // Title
    let title_text = vec![
        Line::from(vec![
            Span::styled("  📇 ", Style::default().fg(Color::Yellow).bold()),
            Span::styled("Team ", Style::default().fg(Color::Cyan).bold()),
            Span::styled("Folio", Style::default().fg(Color::Blue).bold()),
            Span::styled(" - Portfolio Browser", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  People • Skills • Projects",
            Style::default().fg(Color::Gray).italic(),
        )]),
    ];

    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Welcome ")
        .title_style(Style::default().fg(Color::White).bold());

    let title = Paragraph::new(title_text)
        .block(title_block)
        .alignment(Alignment::Left);
    f.render_widget(title, main_chunks[0]);

    // Main content based on current page
    match app.get_current_page() {
        Page::Directory => render_directory_page(f, app, main_chunks[1]),
        Page::Help => render_help_page(f, main_chunks[1]),
    }

    // Footer with navigation help
    let (controls, accent) = footer_controls(app);
    let footer = create_helper_footer(controls, accent);
    f.render_widget(footer, main_chunks[2]);

    // Profile overlay, above everything else
    if let Some(profile) = app.current_profile() {
        render_profile_modal(f, app, profile);
    }
}

fn footer_controls(app: &App) -> (Vec<HelperFooterControl>, Color) {
    if app.current_profile().is_some() {
        return (
            vec![
                HelperFooterControl::new("↑/↓", "Scroll"),
                HelperFooterControl::new("←/→", "Switch Member"),
                HelperFooterControl::new("Esc", "Close"),
                HelperFooterControl::new("CTRL-Q", "Quit"),
            ],
            Color::Magenta,
        );
    }

    match app.get_current_page() {
        Page::Directory => (
            vec![
                HelperFooterControl::new("↑/↓", "Navigate"),
                HelperFooterControl::new("Enter", "Open Profile"),
                HelperFooterControl::new("CTRL-H", "Help"),
                HelperFooterControl::new("CTRL-Q", "Quit"),
            ],
            Color::Cyan,
        ),
        Page::Help => (
            vec![
                HelperFooterControl::new("Esc", "Back"),
                HelperFooterControl::new("CTRL-Q", "Quit"),
            ],
            Color::Yellow,
        ),
    }
}

/// Routes a key press. Returns `Ok(true)` when the app should quit.
///
/// While the overlay is open (scroll lock held) it receives all input
/// except quit; the background page gets nothing until it closes.
fn handle_key_event(app: &App, key: KeyEvent) -> Result<bool> {
    if let (KeyCode::Char('q') | KeyCode::Char('Q'), KeyModifiers::CONTROL) =
        (key.code, key.modifiers)
    {
        return Ok(true);
    }

    if app.is_scroll_locked() {
        handle_profile_modal_input(app, key)?;
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc => {
            if app.has_previous_page() {
                app.go_back();
            }
        }
        _ => match app.get_current_page() {
            Page::Directory => handle_directory_input(app, key)?,
            Page::Help => {}
        },
    }

    Ok(false)
}
