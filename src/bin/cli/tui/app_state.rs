use ratatui::prelude::Rect;

use crate::app::App;
use crate::render::terminal as renderer;
use glossa::progress::Action;
use glossa::render::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    Content,
    Search,
    AddWord,
    ConfirmDelete,
}

/// Transient display state, rebuilt fresh on every launch
pub struct TuiState {
    pub app: App,
    pub mode: Mode,
    pub theme: Theme,

    // Word list state
    pub filter: String,
    pub words: Vec<String>,
    pub selected: usize,
    pub list_scroll: usize,

    // Content state
    pub rendered_lines: Vec<String>,
    pub content_scroll: usize,
    pub content_word: String,

    // Search state
    pub search_input: String,

    // Input state (add-word prompt)
    pub input_text: String,

    // Pending delete confirmation
    pub delete_target: Option<String>,

    // Key state for multi-char sequences
    pub pending_key: Option<char>,

    // Panel areas for mouse hit-testing (updated each draw)
    pub word_area: Option<Rect>,
    pub content_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub stats_lines: Option<Vec<String>>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App, theme: Theme) -> Self {
        let mut state = Self {
            app,
            mode: Mode::Browse,
            theme,
            filter: String::new(),
            words: Vec::new(),
            selected: 0,
            list_scroll: 0,
            rendered_lines: Vec::new(),
            content_scroll: 0,
            content_word: String::new(),
            search_input: String::new(),
            input_text: String::new(),
            delete_target: None,
            pending_key: None,
            word_area: None,
            content_area: None,
            flash_message: None,
            show_help: false,
            stats_lines: None,
            quit: false,
        };

        state.refresh_words();
        state
    }

    /// Re-apply the current filter to the word list
    pub fn refresh_words(&mut self) {
        self.words = self
            .app
            .glossary
            .filter(&self.filter)
            .into_iter()
            .map(str::to_string)
            .collect();

        if self.selected >= self.words.len() {
            self.selected = self.words.len().saturating_sub(1);
        }
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.words.get(self.selected).map(String::as_str)
    }

    pub fn move_down(&mut self) {
        if !self.words.is_empty() && self.selected < self.words.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn go_top(&mut self) {
        self.selected = 0;
    }

    pub fn go_bottom(&mut self) {
        self.selected = self.words.len().saturating_sub(1);
    }

    /// Render the selected word into the content panel and count the view
    pub fn view_selected(&mut self) {
        let Some(word) = self.selected_word().map(str::to_string) else {
            return;
        };

        let explanation = self.app.glossary.get(&word).to_string();
        self.rendered_lines = renderer::render_lines(&explanation, false);
        self.content_word = word;
        self.content_scroll = 0;
        self.mode = Mode::Content;

        if let Err(e) = self.app.record(Action::Viewed) {
            self.flash(format!("{:#}", e));
        }
    }

    pub fn content_scroll_down(&mut self, amount: usize) {
        let max = self.rendered_lines.len().saturating_sub(1);
        self.content_scroll = (self.content_scroll + amount).min(max);
    }

    pub fn content_scroll_up(&mut self, amount: usize) {
        self.content_scroll = self.content_scroll.saturating_sub(amount);
    }

    /// Live-apply the search input as the list filter
    pub fn apply_search(&mut self) {
        self.filter = self.search_input.clone();
        self.selected = 0;
        self.refresh_words();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.filter.clear();
        self.refresh_words();
    }

    /// Add the word typed into the prompt, with an empty explanation
    pub fn add_word_from_input(&mut self) {
        let word = self.input_text.clone();
        self.input_text.clear();
        self.mode = Mode::Browse;

        match self.app.glossary.add(&word, String::new()) {
            Ok(key) => {
                if let Err(e) = self.app.record(Action::Added) {
                    self.flash(format!("{:#}", e));
                } else {
                    self.flash(format!(
                        "Added \"{}\" — write its text with: glossa edit \"{}\"",
                        key, key
                    ));
                }

                // Clear any filter hiding the new entry, then select it
                self.clear_search();
                if let Some(idx) = self.words.iter().position(|w| w == &key) {
                    self.selected = idx;
                }
            }
            Err(e) => self.flash(format!("{}", e)),
        }
    }

    /// Ask for confirmation before deleting the selected word
    pub fn request_delete(&mut self) {
        if let Some(word) = self.selected_word().map(str::to_string) {
            self.delete_target = Some(word);
            self.mode = Mode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        self.mode = Mode::Browse;
        let Some(word) = self.delete_target.take() else {
            return;
        };

        match self.app.glossary.remove(&word) {
            Ok(()) => {
                if self.content_word == word {
                    self.rendered_lines.clear();
                    self.content_word.clear();
                    self.content_scroll = 0;
                }
                self.refresh_words();
                self.flash(format!("Deleted \"{}\"", word));
            }
            Err(e) => self.flash(format!("{}", e)),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
        self.mode = Mode::Browse;
    }

    pub fn toggle_theme(&mut self) {
        // Content styles are looked up at draw time, so the open entry
        // re-renders with the new palette on the next frame
        self.theme = self.theme.toggle();
    }

    /// Toggle the progress summary overlay
    pub fn toggle_stats(&mut self) {
        if self.stats_lines.is_some() {
            self.stats_lines = None;
            return;
        }

        match self.app.progress.summarize() {
            Ok(summary) => {
                let mut lines = Vec::new();
                if summary.per_date.is_empty() {
                    lines.push("No activity recorded yet.".to_string());
                } else {
                    lines.push(format!("{:<12} {:>6} {:>6}", "Date", "Added", "Viewed"));
                    for day in &summary.per_date {
                        lines.push(format!(
                            "{:<12} {:>6} {:>6}",
                            day.date, day.added, day.viewed
                        ));
                    }
                    lines.push(String::new());
                    lines.push(format!(
                        "Total: {} added, {} viewed",
                        summary.total_added, summary.total_viewed
                    ));
                }
                self.stats_lines = Some(lines);
            }
            Err(e) => self.flash(format!("{}", e)),
        }
    }

    pub fn flash(&mut self, message: String) {
        self.flash_message = Some(message);
    }
}
