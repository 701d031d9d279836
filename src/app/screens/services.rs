//! Services carousel and project detail overlay

use super::centered_rect;
use crate::app::theme;
use crate::content::{projects, Project};
use crate::util::wrap;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Looping carousel over the static projects
#[derive(Debug, Clone, Default)]
pub struct ServicesCarousel {
    current: usize,
    /// Project whose detail overlay is open
    selected: Option<usize>,
}

impl ServicesCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Card index currently shown
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_project(&self) -> &'static Project {
        &projects()[self.current]
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % projects().len();
    }

    pub fn previous(&mut self) {
        let len = projects().len();
        self.current = (self.current + len - 1) % len;
    }

    /// Open the overlay for the card on screen
    pub fn open_current(&mut self) {
        self.open(self.current);
    }

    /// Open the overlay for a project; out-of-range indices are ignored
    pub fn open(&mut self, index: usize) {
        if index < projects().len() {
            tracing::debug!(project = projects()[index].title, "opening project details");
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected.map(|i| &projects()[i])
    }

    /// Document lines for the card on screen, with position dots
    pub fn card_lines(&self, width: usize, focused: bool) -> Vec<Line<'static>> {
        let project = self.current_project();
        let title_style = if focused {
            theme::STYLE_FOCUSED
        } else {
            theme::STYLE_ACCENT
        };

        let mut lines = vec![Line::from(vec![
            Span::styled("‹ ", theme::STYLE_DIM),
            Span::styled(format!(" {} {} ", project.icon, project.title), title_style),
            Span::styled(" ›", theme::STYLE_DIM),
        ])];
        lines.extend(
            wrap(project.description, width)
                .into_iter()
                .map(|l| Line::styled(l, theme::STYLE_BODY)),
        );

        let mut tags = Vec::new();
        for tag in project.tags {
            tags.push(Span::styled(format!(" {} ", tag), theme::STYLE_TAG));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));

        let dots: String = (0..projects().len())
            .map(|i| if i == self.current { '●' } else { '○' })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(dots, theme::STYLE_PRIMARY),
            Span::styled("  Enter: ver detalhes", theme::STYLE_HELP),
        ]));
        lines
    }

    /// Detail popup for the selected project, if any
    pub fn render_overlay(&self, f: &mut Frame, area: Rect) {
        let Some(project) = self.selected_project() else {
            return;
        };

        let mut lines = vec![
            Line::styled(project.description, theme::STYLE_BODY),
            Line::default(),
            Line::styled("O que eu ofereço:", theme::STYLE_HEADING),
        ];
        lines.extend(project.details.services.iter().map(|service| {
            Line::from(vec![
                Span::styled("  ✓ ", theme::STYLE_PRIMARY),
                Span::styled(*service, theme::STYLE_BODY),
            ])
        }));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" Solicitar Orçamento ", theme::STYLE_FOCUSED),
            Span::styled("  Enter · Esc fecha", theme::STYLE_HELP),
        ]));

        let height = (lines.len() as u16 + 6).min(area.height);
        let popup = centered_rect(70, height, area);

        let block = Block::default()
            .title(format!(" {} ", project.details.title))
            .title_style(theme::STYLE_ACCENT)
            .borders(Borders::ALL)
            .border_style(theme::STYLE_PRIMARY);

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            popup,
        );
    }
}
