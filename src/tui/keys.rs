//! Key handling for the TUI, kept free of terminal I/O.

use super::state::{InputMode, UiState};
use crate::model::Action;
use crate::orchestrator::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

const PAGE: usize = 10;

/// Side effects the event loop must perform after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Copy(String),
    Quit,
}

pub fn handle_key(state: &mut UiState, session: &mut Session, key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return KeyAction::Quit,
        KeyCode::Tab => {
            state.tab = (state.tab + 1) % 2;
            return KeyAction::None;
        }
        KeyCode::F(1) => {
            state.tab = 1;
            return KeyAction::None;
        }
        _ => {}
    }

    if state.tab == 1 {
        if key.code == KeyCode::Esc {
            state.tab = 0;
        }
        return KeyAction::None;
    }

    let len = session.registry().len();
    match key.code {
        KeyCode::Char('o') if ctrl => {
            let prefill = state
                .last_load_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.begin_prompt(InputMode::LoadPath, prefill);
        }
        KeyCode::Char('s') if ctrl => {
            let prefill = state
                .last_save_path
                .clone()
                .unwrap_or_else(|| session.config().default_save_path());
            state.begin_prompt(InputMode::SavePath, prefill.display().to_string());
        }
        KeyCode::Char('y') if ctrl => {
            if session.registry().is_empty() {
                state.set_info("No names to copy!");
            } else {
                let text = session.registry().serialize().collect::<Vec<_>>().join("\n");
                return KeyAction::Copy(text);
            }
        }
        KeyCode::Char(c) if !ctrl => state.input.push(c),
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Esc => match state.mode {
            InputMode::Name => state.input.clear(),
            _ => {
                state.end_prompt();
                state.set_info("Cancelled");
            }
        },
        KeyCode::Enter => submit(state, session),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1, len),
        KeyCode::PageUp => state.scroll_up(PAGE),
        KeyCode::PageDown => state.scroll_down(PAGE, len),
        KeyCode::Home => state.scroll = 0,
        KeyCode::End => state.scroll = len.saturating_sub(1),
        _ => {}
    }
    KeyAction::None
}

fn submit(state: &mut UiState, session: &mut Session) {
    match state.mode {
        InputMode::Name => {
            let outcome = session.apply(Action::Add(state.input.clone()));
            if !outcome.is_failure() {
                state.input.clear();
            }
            state.show_outcome(&outcome);
        }
        mode => {
            let raw = state.input.trim().to_string();
            state.end_prompt();
            if raw.is_empty() {
                state.set_info("No file selected");
                return;
            }
            let path = PathBuf::from(raw);
            let action = if mode == InputMode::LoadPath {
                Action::Load(path)
            } else {
                Action::Save(path)
            };
            let outcome = session.apply(action);
            state.scroll = 0;
            state.show_outcome(&outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut UiState, session: &mut Session, text: &str) {
        for c in text.chars() {
            handle_key(state, session, key(KeyCode::Char(c)));
        }
    }

    fn setup() -> (UiState, Session) {
        (UiState::default(), Session::new(Config::default()))
    }

    #[test]
    fn typing_and_enter_adds_sorted_names() {
        let (mut state, mut session) = setup();
        for name in ["bob", "Alice", "anna"] {
            type_text(&mut state, &mut session, name);
            handle_key(&mut state, &mut session, key(KeyCode::Enter));
        }
        assert_eq!(session.registry().names(), ["Alice", "anna", "bob"]);
        assert!(state.input.is_empty());
        assert!(!state.info_is_error);
    }

    #[test]
    fn enter_on_blank_input_reports_empty_name() {
        let (mut state, mut session) = setup();
        type_text(&mut state, &mut session, "   ");
        handle_key(&mut state, &mut session, key(KeyCode::Enter));
        assert!(session.registry().is_empty());
        assert!(state.info_is_error);
        assert_eq!(state.info, "Please enter a valid name (non-empty)");
    }

    #[test]
    fn save_prompt_writes_file_and_load_prompt_replaces_names() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let (mut state, mut session) = setup();
        type_text(&mut state, &mut session, "zed");
        handle_key(&mut state, &mut session, key(KeyCode::Enter));

        let out = dir.path().join("saved.txt");
        handle_key(&mut state, &mut session, ctrl('s'));
        assert_eq!(state.mode, InputMode::SavePath);
        state.input = out.display().to_string();
        handle_key(&mut state, &mut session, key(KeyCode::Enter));
        assert_eq!(state.mode, InputMode::Name);
        assert!(out.exists());

        let input = dir.path().join("in.txt");
        std::fs::write(&input, "mia\n\nabe\n").unwrap();
        handle_key(&mut state, &mut session, ctrl('o'));
        state.input = input.display().to_string();
        handle_key(&mut state, &mut session, key(KeyCode::Enter));
        assert_eq!(session.registry().names(), ["abe", "mia"]);
        assert_eq!(state.last_load_path.as_deref(), Some(input.as_path()));
    }

    #[test]
    fn escape_cancels_prompt_without_touching_names() {
        let (mut state, mut session) = setup();
        handle_key(&mut state, &mut session, ctrl('o'));
        type_text(&mut state, &mut session, "whatever.txt");
        handle_key(&mut state, &mut session, key(KeyCode::Esc));
        assert_eq!(state.mode, InputMode::Name);
        assert_eq!(state.input, "");
        assert_eq!(state.info, "Cancelled");
    }

    #[test]
    fn copy_requires_names_and_quit_keys_work() {
        let (mut state, mut session) = setup();
        assert_eq!(handle_key(&mut state, &mut session, ctrl('y')), KeyAction::None);
        type_text(&mut state, &mut session, "b");
        handle_key(&mut state, &mut session, key(KeyCode::Enter));
        type_text(&mut state, &mut session, "a");
        handle_key(&mut state, &mut session, key(KeyCode::Enter));
        assert_eq!(
            handle_key(&mut state, &mut session, ctrl('y')),
            KeyAction::Copy("a\nb".into())
        );
        assert_eq!(handle_key(&mut state, &mut session, ctrl('q')), KeyAction::Quit);
    }

    #[test]
    fn help_tab_swallows_typing() {
        let (mut state, mut session) = setup();
        handle_key(&mut state, &mut session, key(KeyCode::F(1)));
        type_text(&mut state, &mut session, "x");
        assert!(state.input.is_empty());
        handle_key(&mut state, &mut session, key(KeyCode::Esc));
        assert_eq!(state.tab, 0);
    }
}
