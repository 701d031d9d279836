//! Main application controller
//!
//! Routes keys to the active screen, drains background results every frame
//! and renders the notifications on top of everything.

use crate::{
    app::{
        screens::{IntroScreen, MainAction, PortfolioScreen},
        state::{AppState, NavigationAction, StateManager},
        theme,
        tui::Tui,
    },
    config::FolioConfig,
    form::{QuoteClient, QuotePayload, SubmitError},
    notify::{NotificationCenter, Variant},
    util::wrap,
    Result,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use tokio::sync::mpsc;

type SubmitOutcome = std::result::Result<(), SubmitError>;

/// TUI application controller
pub struct App {
    /// Application state manager
    state_manager: StateManager,
    config: FolioConfig,
    /// Screen components
    intro: IntroScreen,
    portfolio: PortfolioScreen,
    notifications: NotificationCenter,
    client: QuoteClient,
    /// Submission results, drained every frame
    submit_tx: mpsc::UnboundedSender<SubmitOutcome>,
    submit_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl App {
    /// Create a new application instance starting at `start`
    pub fn new(config: FolioConfig, start: AppState) -> Result<Self> {
        let client = QuoteClient::new(config.endpoint.clone())?;
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state_manager: StateManager::new(start),
            intro: IntroScreen::new(config.typing_delay()),
            portfolio: PortfolioScreen::new(),
            notifications: NotificationCenter::new(config.notification_lifetime()),
            client,
            submit_tx,
            submit_rx,
            config,
        })
    }

    /// Start the intro animation if the app opens on it. Needs a tokio runtime.
    pub fn start(&mut self) {
        if self.state_manager.current_state() == AppState::Intro {
            self.intro.mount();
        }
    }

    pub fn state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn intro(&self) -> &IntroScreen {
        &self.intro
    }

    pub fn portfolio(&self) -> &PortfolioScreen {
        &self.portfolio
    }

    pub fn portfolio_mut(&mut self) -> &mut PortfolioScreen {
        &mut self.portfolio
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn is_submitting(&self) -> bool {
        self.portfolio.quote().form().is_submitting()
    }

    /// Run the main application loop until quit
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        self.start();
        while !self.should_quit() {
            self.poll_background();
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_key(key);
            }
            if tui.tick_elapsed() {
                self.on_tick();
            }
            // Let the typing and submission tasks make progress
            tokio::task::yield_now().await;
        }
        self.intro.unmount();
        Ok(())
    }

    /// Handle keyboard events and update state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if StateManager::is_force_quit(key) {
            self.state_manager.quit();
            return;
        }

        match self.state_manager.current_state() {
            AppState::Intro => self.handle_intro_key(key),
            AppState::Main => match self.portfolio.handle_key(key, &mut self.notifications) {
                MainAction::Quit => self.state_manager.quit(),
                MainAction::Submit(payload) => self.spawn_submission(payload),
                MainAction::None => {}
            },
        }
    }

    fn handle_intro_key(&mut self, key: KeyEvent) {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Quit => self.state_manager.quit(),
            NavigationAction::Select if self.intro.is_complete() => {
                self.intro.unmount();
                self.state_manager.enter_main();
            }
            _ => {}
        }
    }

    fn spawn_submission(&mut self, payload: QuotePayload) {
        let client = self.client.clone();
        let tx = self.submit_tx.clone();
        tokio::spawn(async move {
            let outcome = client.submit(&payload).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("app gone before submission finished");
            }
        });
    }

    /// Apply typing progress and finished submissions
    pub fn poll_background(&mut self) {
        self.intro.poll();
        while let Ok(outcome) = self.submit_rx.try_recv() {
            self.portfolio
                .finish_submit(&outcome, &mut self.notifications);
        }
    }

    /// Advance animations and expire notifications
    pub fn on_tick(&mut self) {
        self.intro.tick();
        self.portfolio.tick();
        self.notifications.expire(Instant::now());
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame) {
        match self.state_manager.current_state() {
            AppState::Intro => self.intro.render(f),
            AppState::Main => self.portfolio.render(f),
        }
        self.render_notifications(f);
    }

    /// Stack toasts upwards from the bottom-right corner, newest lowest
    fn render_notifications(&self, f: &mut Frame) {
        const TOAST_WIDTH: u16 = 44;

        let size = f.size();
        let width = TOAST_WIDTH.min(size.width);
        let mut bottom = size.height.saturating_sub(1);

        for notification in self.notifications.iter().rev() {
            let body = wrap(&notification.description, width.saturating_sub(4) as usize);
            let height = body.len() as u16 + 2;
            if bottom < height {
                break;
            }
            let area = Rect::new(size.width - width, bottom - height, width, height);
            bottom -= height;

            let style = match notification.variant {
                Variant::Success => theme::STYLE_SUCCESS,
                Variant::Error => theme::STYLE_ERROR,
                Variant::Info => theme::STYLE_PRIMARY,
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(format!(" {} ", notification.title))
                .title_style(style);
            let lines: Vec<Line> = body
                .into_iter()
                .map(|l| Line::styled(l, theme::STYLE_BODY))
                .collect();

            f.render_widget(Clear, area);
            f.render_widget(Paragraph::new(lines).block(block), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn config() -> FolioConfig {
        FolioConfig::default().with_typing_delay_ms(10)
    }

    #[tokio::test(start_paused = true)]
    async fn test_intro_cta_waits_for_typing() {
        let mut app = App::new(config(), AppState::Intro).unwrap();
        app.start();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state(), AppState::Intro);

        tokio::time::sleep(Duration::from_secs(1)).await;
        app.poll_background();
        assert!(app.intro().is_complete());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state(), AppState::Main);
        assert!(!app.intro().is_mounted());
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = App::new(config(), AppState::Main).unwrap();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = App::new(config(), AppState::Intro).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_toasts_render_bottom_right() {
        let mut app = App::new(config(), AppState::Main).unwrap();
        app.notifications.error("Erro ao enviar", "Tente novamente.");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let bottom_rows: String = (20..30)
            .flat_map(|y| (56..100).map(move |x| (x, y)))
            .map(|(x, y)| buffer.get(x, y).symbol().to_string())
            .collect();
        assert!(bottom_rows.contains("Erro ao enviar"));
    }
}
