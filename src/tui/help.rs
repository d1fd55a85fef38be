use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn keybind(key: &'static str, pad: usize, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(format!("{:pad$}{what}", "")),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
            Span::raw(" / "),
            Span::styled("Ctrl-Q", Style::default().fg(Color::Magenta)),
            Span::raw("  Quit"),
        ]),
        keybind("Enter", 8, "Add name / confirm file path"),
        keybind("Ctrl-O", 7, "Load names from file (replaces current list)"),
        keybind("Ctrl-S", 7, "Save sorted names to file"),
        keybind("Ctrl-Y", 7, "Copy sorted names to clipboard"),
        keybind("Esc", 10, "Cancel file prompt / clear input"),
        keybind("tab", 10, "Switch tabs"),
        keybind("F1", 11, "Show this help"),
        Line::from(""),
        Line::from("Names list:"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("↑/↓", Style::default().fg(Color::Magenta)),
            Span::raw(" or "),
            Span::styled("PgUp/PgDn", Style::default().fg(Color::Magenta)),
            Span::raw("  Scroll"),
        ]),
        Line::from(""),
        Line::from("Sorting:"),
        Line::from("  Names are grouped by their first letter, then ordered"),
        Line::from("  case-insensitively. Names that differ only in case keep"),
        Line::from("  the order in which they were entered."),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}
