//! Intro screen implementation
//!
//! Types the greeting one character at a time, then reveals the tagline and
//! the call-to-action leading to the main screen.

use super::centered_rect;
use crate::app::theme;
use crate::content::{INTRO_CTA, INTRO_GREETING, INTRO_TAGLINE};
use crate::typing::{TypingAnimation, TypingEvent, TypingHandle};
use crate::util::wrap;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Frames between cursor blinks once typing is done
const BLINK_FRAMES: u64 = 10;

/// Intro screen component
#[derive(Debug)]
pub struct IntroScreen {
    animation: TypingAnimation,
    handle: Option<TypingHandle>,
    displayed: String,
    complete: bool,
    frame: u64,
}

impl IntroScreen {
    /// Create an intro typing the standard greeting
    pub fn new(delay: Duration) -> Self {
        Self::with_text(INTRO_GREETING, delay)
    }

    pub fn with_text(text: &str, delay: Duration) -> Self {
        Self {
            animation: TypingAnimation::new(text, delay),
            handle: None,
            displayed: String::new(),
            complete: false,
            frame: 0,
        }
    }

    /// Start typing from an empty line. Needs a tokio runtime.
    pub fn mount(&mut self) {
        self.displayed.clear();
        self.complete = false;
        self.frame = 0;
        self.handle = Some(self.animation.spawn());
    }

    /// Stop the animation timer; nothing changes afterwards
    pub fn unmount(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Apply every animation event delivered since the last poll
    pub fn poll(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        while let Some(event) = handle.try_next() {
            match event {
                TypingEvent::Prefix(prefix) => self.displayed = prefix,
                TypingEvent::Complete => {
                    self.complete = true;
                    tracing::debug!("intro typing complete");
                }
            }
        }
    }

    /// Advance the cursor blink
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    fn cursor_visible(&self) -> bool {
        !self.complete || (self.frame / BLINK_FRAMES) % 2 == 0
    }

    /// Render the intro screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();
        let width = size.width.saturating_sub(8).clamp(20, 72);

        let mut lines = vec![Line::from(vec![
            Span::styled(self.displayed.clone(), theme::STYLE_HEADING),
            Span::styled(
                if self.cursor_visible() { "▌" } else { " " },
                theme::STYLE_PRIMARY,
            ),
        ])];

        if self.complete {
            lines.push(Line::default());
            lines.extend(
                wrap(INTRO_TAGLINE, width as usize)
                    .into_iter()
                    .map(|l| Line::styled(l, theme::STYLE_BODY)),
            );
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("[ {} → ]", INTRO_CTA),
                theme::STYLE_FOCUSED,
            ));
            lines.push(Line::styled("Enter para continuar · q para sair", theme::STYLE_HELP));
        }

        let height = lines.len() as u16;
        let area: Rect = centered_rect(100, height, size);
        let area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            width: width.min(area.width),
            ..area
        };

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

impl Drop for IntroScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    const DELAY: Duration = Duration::from_millis(80);

    fn screen_text(screen: &IntroScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_types_full_greeting_then_completes() {
        let mut screen = IntroScreen::with_text("Oi!", DELAY);
        screen.mount();

        tokio::time::sleep(DELAY * 2 + DELAY / 2).await;
        screen.poll();
        assert_eq!(screen.displayed(), "Oi");
        assert!(!screen.is_complete());

        tokio::time::sleep(DELAY).await;
        screen.poll();
        assert_eq!(screen.displayed(), "Oi!");
        assert!(screen.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_freezes_text() {
        let mut screen = IntroScreen::with_text("abcdef", DELAY);
        screen.mount();
        tokio::time::sleep(DELAY * 2 + DELAY / 2).await;
        screen.poll();
        assert_eq!(screen.displayed(), "ab");

        screen.unmount();
        tokio::time::sleep(DELAY * 10).await;
        screen.poll();
        assert_eq!(screen.displayed(), "ab");
        assert!(!screen.is_complete());
        assert!(!screen.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_restarts() {
        let mut screen = IntroScreen::with_text("xy", DELAY);
        screen.mount();
        tokio::time::sleep(DELAY * 3).await;
        screen.poll();
        assert!(screen.is_complete());

        screen.mount();
        assert_eq!(screen.displayed(), "");
        assert!(!screen.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cta_only_after_completion() {
        let mut screen = IntroScreen::with_text("Olá", DELAY);
        screen.mount();
        tokio::time::sleep(DELAY + DELAY / 2).await;
        screen.poll();
        assert!(!screen_text(&screen).contains(INTRO_CTA));

        tokio::time::sleep(DELAY * 3).await;
        screen.poll();
        let text = screen_text(&screen);
        assert!(text.contains("Olá"));
        assert!(text.contains(INTRO_CTA));
    }
}
