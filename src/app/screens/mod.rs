//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod intro;
pub mod portfolio;
pub mod quote;
pub mod services;

pub use intro::IntroScreen;
pub use portfolio::{MainAction, PortfolioScreen};
pub use quote::QuoteScreen;
pub use services::ServicesCarousel;

use crate::form::FormField;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widget on the main screen that receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Nothing focused; arrows scroll the page
    Page,
    Carousel,
    Field(FormField),
    Attachment,
    Submit,
}

impl Focus {
    /// Tab order
    pub fn order() -> [Self; 8] {
        [
            Self::Page,
            Self::Carousel,
            Self::Field(FormField::Nome),
            Self::Field(FormField::Contato),
            Self::Field(FormField::Tipo),
            Self::Field(FormField::Mensagem),
            Self::Attachment,
            Self::Submit,
        ]
    }

    pub fn next(self) -> Self {
        let order = Self::order();
        let idx = order.iter().position(|f| *f == self).unwrap_or_default();
        order[(idx + 1) % order.len()]
    }

    pub fn previous(self) -> Self {
        let order = Self::order();
        let idx = order.iter().position(|f| *f == self).unwrap_or_default();
        order[(idx + order.len() - 1) % order.len()]
    }

    /// Whether printable keys are typed into a text field
    pub fn captures_text(self) -> bool {
        matches!(self, Self::Field(field) if field.is_text())
    }
}

/// Rectangle of `percent_x` width and fixed height centered in `r`
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(r.height)),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
