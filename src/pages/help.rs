use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Static help page listing the keyboard shortcuts.
pub fn render_help_page(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Keyboard Shortcuts",
            Style::default().fg(Color::Cyan).bold(),
        )]),
        Line::from(""),
        binding("↑/↓", "Move between member tiles"),
        binding("Enter", "Open the selected member's profile"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  While a profile is open",
            Style::default().fg(Color::Magenta).bold(),
        )]),
        Line::from(""),
        binding("↑/↓", "Scroll the profile"),
        binding("←/→", "Jump to the previous/next member"),
        binding("Esc", "Close the profile"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Anywhere",
            Style::default().fg(Color::Yellow).bold(),
        )]),
        Line::from(""),
        binding("CTRL-H", "Show this help page"),
        binding("Esc", "Go back"),
        binding("CTRL-Q", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  While a profile is open the background directory is frozen;",
            Style::default().fg(Color::Gray).italic(),
        )]),
        Line::from(vec![Span::styled(
            "  close the profile to get the member list back.",
            Style::default().fg(Color::Gray).italic(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Help ")
        .title_style(Style::default().fg(Color::White).bold());

    let help = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(help, area);
}

fn binding(keys: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<8}"), Style::default().fg(Color::White).bold()),
        Span::styled(description.to_string(), Style::default().fg(Color::Gray)),
    ])
}
