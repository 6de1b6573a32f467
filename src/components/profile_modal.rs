use anyhow::Result;
use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{app::App, profile::Profile};

/// Renders the profile detail overlay over whatever page is active.
///
/// Section order is fixed: about, skills, projects, contact. Absent
/// optional data (a missing skill group, a project link, a contact
/// link) is omitted rather than rendered empty.
pub fn render_profile_modal(f: &mut Frame, app: &App, profile: &Profile) {
    let area = centered_rect(84, 85, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::THICK)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" {}'s Profile ", profile.name))
        .title_style(Style::default().fg(Color::White).bold())
        .title_bottom(Line::from(" Esc Close ✕ ").right_aligned());

    let lines = profile_lines(profile);

    // The paragraph wraps to the inner width, so the scroll ceiling is
    // the wrapped height, not the logical line count.
    let inner_width = area.width.saturating_sub(2);
    let wrapped = wrapped_height(&lines, inner_width);
    app.set_modal_scroll_max(wrapped.saturating_sub(1));

    let content = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.modal_scroll(), 0))
        .alignment(Alignment::Left);

    f.render_widget(content, area);
}

/// Key handling while the overlay is open: the overlay owns scrolling
/// and the background page receives nothing until it closes.
pub fn handle_profile_modal_input(app: &App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close(),
        KeyCode::Up => app.modal_scroll_up(),
        KeyCode::Down => app.modal_scroll_down(),
        KeyCode::Left => app.open_previous()?,
        KeyCode::Right => app.open_next()?,
        _ => {}
    }
    Ok(())
}

/// Display rows the lines occupy once wrapped to `width` columns.
/// Word wrap can only use more rows than this ceiling-division
/// estimate, never fewer, and the ceiling does not subtract the
/// viewport height, so the tail of a long profile stays reachable.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    if width == 0 {
        return lines.len() as u16;
    }
    lines
        .iter()
        .map(|line| (line.width() as u16).div_ceil(width).max(1))
        .sum()
}

fn profile_lines(profile: &Profile) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(&*profile.avatar, Style::default().fg(Color::Yellow)),
        Span::styled("  ", Style::default()),
        Span::styled(&*profile.profession, Style::default().fg(Color::Gray).italic()),
    ]));

    section_title(&mut lines, "About Me");
    for paragraph in profile.bio_paragraphs() {
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(paragraph, Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    if !profile.skills.is_empty() {
        section_title(&mut lines, "Skills");
        for (title, skills) in profile.skills.groups() {
            lines.push(Line::from(vec![Span::styled(
                format!("  {title}"),
                Style::default().fg(Color::LightBlue).bold(),
            )]));
            for skill in skills {
                lines.push(Line::from(vec![
                    Span::styled("    ✔ ", Style::default().fg(Color::Green)),
                    Span::styled(skill.as_str(), Style::default().fg(Color::White)),
                ]));
            }
            lines.push(Line::from(""));
        }
    }

    if !profile.projects.is_empty() {
        section_title(&mut lines, "Projects");
        for project in &profile.projects {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}", project.title),
                Style::default().fg(Color::Cyan).bold(),
            )]));
            lines.push(Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(&*project.description, Style::default().fg(Color::White)),
            ]));
            if !project.technologies.is_empty() {
                let tags = project
                    .technologies
                    .iter()
                    .map(|t| format!("[{t}]"))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(Line::from(vec![Span::styled(
                    format!("  {tags}"),
                    Style::default().fg(Color::LightMagenta),
                )]));
            }
            if let Some(url) = &project.live_link {
                lines.push(Line::from(vec![
                    Span::styled("  🔗 Live Demo ", Style::default().fg(Color::Green)),
                    Span::styled(url.as_str(), Style::default().fg(Color::Gray)),
                ]));
            }
            if let Some(url) = &project.source_link {
                lines.push(Line::from(vec![
                    Span::styled("  📁 Source ", Style::default().fg(Color::Blue)),
                    Span::styled(url.as_str(), Style::default().fg(Color::Gray)),
                ]));
            }
            lines.push(Line::from(""));
        }
    }

    section_title(&mut lines, &format!("Connect with {}", profile.name));
    lines.push(Line::from(vec![
        Span::styled("  ✉ Email ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("mailto:{}", profile.contact.email),
            Style::default().fg(Color::Gray),
        ),
    ]));
    for (label, url) in profile.contact.links() {
        lines.push(Line::from(vec![
            Span::styled(format!("  ⛓ {label} "), Style::default().fg(Color::Cyan)),
            Span::styled(url.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));

    lines
}

fn section_title(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("  ── {title} ──"),
        Style::default().fg(Color::Magenta).bold(),
    )]));
    lines.push(Line::from(""));
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
