//! Application state management for Revboard
//!
//! This module owns the synchronization state (last-good review collection
//! plus the initial-load flag), applies fetch outcomes delivered by the
//! refresh scheduler, and handles keyboard input.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::data::Review;
use crate::sync::RefreshMessage;

/// Application state enum representing the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state before the first fetch attempt settles
    Loading,
    /// Table view; refreshes keep happening silently in the background
    ReviewList,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Last successfully fetched review collection, in server order
    pub reviews: Vec<Review>,
    /// Index of currently selected row in the table
    pub selected_index: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag indicating a manual refresh has been requested
    pub refresh_requested: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Timestamp of the last successful fetch
    pub last_refresh: Option<DateTime<Local>>,
    /// Message of the most recent failed fetch, kept for diagnostics only
    pub last_error: Option<String>,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            reviews: Vec::new(),
            selected_index: 0,
            should_quit: false,
            refresh_requested: false,
            show_help: false,
            last_refresh: None,
            last_error: None,
        }
    }

    /// Applies one fetch outcome from the refresh scheduler
    ///
    /// Success replaces the stored collection wholesale; failure leaves it
    /// untouched and only records the error. Either way the first settled
    /// outcome moves the app out of Loading, and it never goes back.
    pub fn apply_refresh_message(&mut self, message: RefreshMessage) {
        match message {
            RefreshMessage::ReviewsUpdated(reviews) => {
                self.reviews = reviews;
                self.last_refresh = Some(Local::now());
                self.clamp_selection();
            }
            RefreshMessage::RefreshFailed(reason) => {
                self.last_error = Some(reason);
            }
        }

        if self.state == AppState::Loading {
            self.state = AppState::ReviewList;
        }
    }

    /// Returns the number of reviews currently displayed
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Returns the currently selected review, if any
    pub fn selected_review(&self) -> Option<&Review> {
        self.reviews.get(self.selected_index)
    }

    /// Keeps the selection valid when a refresh shrinks the collection
    fn clamp_selection(&mut self) {
        if self.reviews.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.reviews.len() {
            self.selected_index = self.reviews.len() - 1;
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit the application
    /// - `Up`/`k`: Move selection up
    /// - `Down`/`j`: Move selection down
    /// - `g`/`G`: Jump to first/last row
    /// - `r`: Request an immediate refresh
    /// - `?`: Toggle help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
            AppState::ReviewList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Char('g') => {
                    self.selected_index = 0;
                }
                KeyCode::Char('G') => {
                    if !self.reviews.is_empty() {
                        self.selected_index = self.reviews.len() - 1;
                    }
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Moves the selection up in the table, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.review_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the table, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.review_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
