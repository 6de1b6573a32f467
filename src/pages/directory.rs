use anyhow::Result;
use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Page};

/// The directory view: one summary tile per roster profile, in roster
/// order, plus a welcome pane. Enter on a tile opens that profile's
/// detail overlay.
pub fn render_directory_page(f: &mut Frame, app: &App, area: Rect) {
    let blocks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(50), // Left side - welcome & status
            Constraint::Percentage(50), // Right side - member tiles
        ])
        .split(area);

    let left_blocks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Welcome message
            Constraint::Min(0),    // Team status
        ])
        .split(blocks[0]);

    draw_welcome(f, left_blocks[0]);
    draw_team_status(f, app, left_blocks[1]);
    draw_member_tiles(f, app, blocks[1]);
}

pub fn handle_directory_input(app: &App, key: KeyEvent) -> Result<()> {
    let has_ctrl = key.modifiers == KeyModifiers::CONTROL;
    match key.code {
        KeyCode::Up => app.directory_select_previous(),
        KeyCode::Down => app.directory_select_next(),
        KeyCode::Enter => app.open_under_cursor()?,
        KeyCode::Char('h') | KeyCode::Char('H') => {
            if has_ctrl {
                app.navigate_to(Page::Help);
            }
        }
        _ => {}
    }
    Ok(())
}

fn draw_welcome(f: &mut Frame<'_>, area: Rect) {
    let welcome_content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("👋 ", Style::default().fg(Color::Yellow)),
            Span::styled("Welcome to ", Style::default().fg(Color::White)),
            Span::styled("Folio", Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("🧑‍💻 ", Style::default().fg(Color::Green)),
            Span::styled(
                "Meet the team behind the work",
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled("📂 ", Style::default().fg(Color::Blue)),
            Span::styled(
                "Bios, skills, projects and contacts",
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
    ];

    let welcome_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" About ")
        .title_style(Style::default().fg(Color::White).bold());

    let welcome = Paragraph::new(welcome_content)
        .block(welcome_block)
        .alignment(Alignment::Left);

    f.render_widget(welcome, area);
}

fn draw_team_status(f: &mut Frame<'_>, app: &App, area: Rect) {
    let status_content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("🟢 ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("{} team members listed", app.roster().len()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Pick a member to read more →",
            Style::default().fg(Color::Gray).italic(),
        )]),
    ];

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Gray))
        .title(" Team ")
        .title_style(Style::default().fg(Color::White).bold());

    let status = Paragraph::new(status_content)
        .block(status_block)
        .alignment(Alignment::Left);

    f.render_widget(status, area);
}

fn draw_member_tiles(f: &mut Frame<'_>, app: &App, area: Rect) {
    let tiles: Vec<ListItem> = app
        .roster()
        .profiles()
        .iter()
        .map(|profile| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", profile.avatar),
                        Style::default().fg(Color::Yellow).bold(),
                    ),
                    Span::styled(
                        profile.name.clone(),
                        Style::default().fg(Color::White).bold(),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("   ", Style::default()),
                    Span::styled(
                        profile.profession.clone(),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("   ", Style::default()),
                    Span::styled(
                        "Read more ↵",
                        Style::default().fg(Color::Cyan).italic(),
                    ),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let tiles_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::White))
        .title(" Members ")
        .title_style(Style::default().fg(Color::White).bold());

    let list = List::new(tiles)
        .block(tiles_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut app.directory_nav().write().unwrap());
}
