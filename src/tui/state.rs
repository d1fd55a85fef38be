use crate::model::Outcome;
use ratatui::style::Color;
use std::path::PathBuf;

/// What the input box is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Name,
    LoadPath,
    SavePath,
}

impl InputMode {
    pub fn title(self) -> &'static str {
        match self {
            InputMode::Name => "Enter Name",
            InputMode::LoadPath => "Load Names File (Enter to load, Esc to cancel)",
            InputMode::SavePath => "Save Sorted Names (Enter to save, Esc to cancel)",
        }
    }
}

pub struct UiState {
    pub tab: usize,
    pub mode: InputMode,
    pub input: String,
    pub info: String,
    pub info_is_error: bool,
    pub scroll: usize,
    pub last_load_path: Option<PathBuf>,
    pub last_save_path: Option<PathBuf>,
    // Name typed before a path prompt opened, restored when the prompt closes.
    stashed_name: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tab: 0,
            mode: InputMode::Name,
            input: String::new(),
            info: "Type a name and press Enter. F1 for help.".into(),
            info_is_error: false,
            scroll: 0,
            last_load_path: None,
            last_save_path: None,
            stashed_name: String::new(),
        }
    }
}

impl UiState {
    pub fn set_info(&mut self, msg: impl Into<String>) {
        self.info = msg.into();
        self.info_is_error = false;
    }

    pub fn info_color(&self) -> Color {
        if self.info_is_error {
            Color::Red
        } else {
            Color::Green
        }
    }

    /// Show an outcome in the status line and remember paths that worked.
    pub fn show_outcome(&mut self, outcome: &Outcome) {
        self.info = outcome.to_message();
        self.info_is_error = outcome.is_failure();
        match outcome {
            Outcome::Loaded { path, .. } => self.last_load_path = Some(path.clone()),
            Outcome::Saved { path, .. } => self.last_save_path = Some(path.clone()),
            _ => {}
        }
    }

    /// Switch the input box to a path prompt, pre-filled with `prefill`.
    pub fn begin_prompt(&mut self, mode: InputMode, prefill: String) {
        if self.mode == InputMode::Name {
            self.stashed_name = std::mem::take(&mut self.input);
        }
        self.mode = mode;
        self.input = prefill;
    }

    /// Return to name entry, restoring whatever name was being typed.
    pub fn end_prompt(&mut self) {
        self.mode = InputMode::Name;
        self.input = std::mem::take(&mut self.stashed_name);
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    pub fn scroll_down(&mut self, by: usize, len: usize) {
        self.scroll = (self.scroll + by).min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_restores_partially_typed_name() {
        let mut state = UiState {
            input: "Ann".into(),
            ..Default::default()
        };
        state.begin_prompt(InputMode::SavePath, "/tmp/sorted_names.txt".into());
        assert_eq!(state.input, "/tmp/sorted_names.txt");
        state.end_prompt();
        assert_eq!(state.mode, InputMode::Name);
        assert_eq!(state.input, "Ann");
    }

    #[test]
    fn scrolling_stays_within_list() {
        let mut state = UiState::default();
        state.scroll_down(10, 3);
        assert_eq!(state.scroll, 2);
        state.scroll_up(5);
        assert_eq!(state.scroll, 0);
    }
}
