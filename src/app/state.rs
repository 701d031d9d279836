//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event processing
//! for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Typing animation followed by the call-to-action
    #[default]
    Intro,
    /// Scrollable portfolio page
    Main,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Scroll a page up
    PageUp,
    /// Scroll a page down
    PageDown,
    /// Confirm selection (Enter)
    Select,
    /// Go back/cancel (Esc)
    Back,
    /// Next widget (Tab)
    Next,
    /// Previous widget (Shift+Tab)
    Previous,
    /// Jump to the n-th section (1-5)
    Section(usize),
    /// Back to the top of the page (t, Home)
    Top,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
///
/// The intro only ever leads to the main screen; there is no way back.
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager at the given screen
    pub fn new(initial: AppState) -> Self {
        Self {
            current_state: initial,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Leave the intro for the main screen. Returns false if already there.
    pub fn enter_main(&mut self) -> bool {
        if self.current_state == AppState::Main {
            return false;
        }
        tracing::info!(from = ?self.current_state, "entering main screen");
        self.current_state = AppState::Main;
        true
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,
            KeyCode::PageUp => NavigationAction::PageUp,
            KeyCode::PageDown | KeyCode::Char(' ') => NavigationAction::PageDown,
            KeyCode::Home | KeyCode::Char('t') => NavigationAction::Top,

            // Section shortcuts
            KeyCode::Char(c @ '1'..='5') => NavigationAction::Section(c as usize - '1' as usize),

            // Selection and confirmation
            KeyCode::Enter => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            _ => NavigationAction::None,
        }
    }

    /// Whether a key quits regardless of focus
    pub fn is_force_quit(key: KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new(AppState::Intro)
    }
}
