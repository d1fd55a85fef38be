mod export;
mod help;
mod keys;
mod state;

use crate::model::Action;
use crate::orchestrator::Session;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keys::{handle_key, KeyAction};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Terminal,
};
use state::UiState;
use std::{io, time::Duration};

/// Run the interactive UI, applying `initial` actions (from CLI flags) first.
pub fn run(session: &mut Session, initial: Vec<Action>) -> Result<()> {
    let mut state = UiState::default();
    for outcome in session.apply_all(initial) {
        state.show_outcome(&outcome);
    }

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let res = match Terminal::new(CrosstermBackend::new(stdout)).context("create terminal") {
        Ok(mut terminal) => {
            terminal.clear().ok();
            event_loop(&mut terminal, &mut state, session)
        }
        Err(e) => Err(e),
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut UiState,
    session: &mut Session,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| draw(f.area(), f, state, session))
            .context("draw frame")?;

        if !event::poll(Duration::from_millis(250)).context("poll terminal events")? {
            continue;
        }
        let Event::Key(k) = event::read().context("read terminal event")? else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }
        match handle_key(state, session, k) {
            KeyAction::Quit => return Ok(()),
            KeyAction::Copy(text) => match export::copy_to_clipboard(text) {
                Ok(()) => state.set_info(format!(
                    "✓ Copied {} name(s) to clipboard",
                    session.registry().len()
                )),
                Err(e) => {
                    state.set_info(format!("Clipboard copy failed: {e:#}"));
                    state.info_is_error = true;
                }
            },
            KeyAction::None => {}
        }
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let tabs = Tabs::new(vec![Line::from("Names"), Line::from("Help")])
        .select(state.tab)
        .block(Block::default().borders(Borders::ALL).title("name-sorter"))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        0 => draw_names(chunks[1], f, state, session),
        _ => help::draw_help(chunks[1], f),
    }
}

fn draw_names(area: Rect, f: &mut ratatui::Frame, state: &UiState, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    let input = Paragraph::new(state.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(state.mode.title()),
    );
    f.render_widget(input, chunks[0]);
    let cursor_x = chunks[0].x + 1 + state.input.chars().count() as u16;
    f.set_cursor_position((
        cursor_x.min(chunks[0].right().saturating_sub(2)),
        chunks[0].y + 1,
    ));

    let names = session.registry().names();
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let scroll = state.scroll.min(names.len().saturating_sub(visible));
    let width = names.len().to_string().len();

    // Highlight the first name of each first-letter group.
    let mut prev_group: Option<char> = None;
    let lines: Vec<Line> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let group = name.chars().next().and_then(|c| c.to_lowercase().next());
            let name_style = if group != prev_group {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            prev_group = group;
            Line::from(vec![
                Span::styled(
                    format!("{:>width$}  ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(name.clone(), name_style),
            ])
        })
        .collect();
    let list = Paragraph::new(lines).scroll((scroll as u16, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Sorted Names ({})", names.len())),
    );
    f.render_widget(list, chunks[1]);

    let status = Paragraph::new(Line::from(Span::styled(
        state.info.clone(),
        Style::default().fg(state.info_color()),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status  (Ctrl-O load · Ctrl-S save · F1 help)"),
    );
    f.render_widget(status, chunks[2]);
}
