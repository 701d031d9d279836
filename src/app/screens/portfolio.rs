//! Main screen implementation
//!
//! One scrollable document holding every section, a navigation bar that
//! follows the active section, and the popups (project details, attachment
//! prompt) drawn above it.

use super::{Focus, QuoteScreen, ServicesCarousel};
use crate::app::state::{NavigationAction, StateManager};
use crate::app::theme;
use crate::content::{
    ABOUT_PARAGRAPHS, CONTACT_INTRO, HERO_CTA, HERO_HIGHLIGHT, HERO_SUBTITLE, HERO_TITLE,
    OWNER_INITIALS, OWNER_NAME, QUOTE_INTRO, SERVICES_INTRO, SOCIAL_LINKS, TECH_LOGOS,
};
use crate::form::{FormField, QuotePayload, SubmitBlocked, SubmitError};
use crate::navigation::{Section, SectionNavigator};
use crate::notify::NotificationCenter;
use crate::util::wrap;
use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::collections::HashMap;

/// Outcome of a key press on the main screen
#[derive(Debug)]
pub enum MainAction {
    None,
    Quit,
    /// Validated payload ready to be sent
    Submit(QuotePayload),
}

/// Laid-out page content
struct Document {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
    focus_rows: HashMap<Focus, u16>,
}

/// Main screen component
#[derive(Debug)]
pub struct PortfolioScreen {
    navigator: SectionNavigator,
    services: ServicesCarousel,
    quote: QuoteScreen,
    focus: Focus,
    focus_rows: HashMap<Focus, u16>,
    width: u16,
    height: u16,
}

impl Default for PortfolioScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioScreen {
    /// Layout used until the first render reports the real size
    const DEFAULT_BODY: (u16, u16) = (76, 18);

    pub fn new() -> Self {
        let mut screen = Self {
            navigator: SectionNavigator::new(),
            services: ServicesCarousel::new(),
            quote: QuoteScreen::new(),
            focus: Focus::Page,
            focus_rows: HashMap::new(),
            width: 0,
            height: 0,
        };
        let (width, height) = Self::DEFAULT_BODY;
        screen.relayout(width, height);
        screen
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut SectionNavigator {
        &mut self.navigator
    }

    pub fn services(&self) -> &ServicesCarousel {
        &self.services
    }

    pub fn quote(&self) -> &QuoteScreen {
        &self.quote
    }

    pub fn quote_mut(&mut self) -> &mut QuoteScreen {
        &mut self.quote
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.reveal_focus();
    }

    /// Recompute the document for a body area and hand anchors to the navigator
    pub fn relayout(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let doc = self.document(width as usize);
        self.focus_rows = doc.focus_rows;
        self.navigator
            .set_layout(doc.anchors, doc.lines.len() as u16, height);
    }

    /// Advance the scroll animation
    pub fn tick(&mut self) {
        self.navigator.tick();
    }

    fn reveal_focus(&mut self) {
        self.relayout(self.width, self.height);
        if let Some(row) = self.focus_rows.get(&self.focus).copied() {
            self.navigator.ensure_visible(row);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, notifications: &mut NotificationCenter) -> MainAction {
        if self.quote.is_prompt_open() {
            self.quote.handle_prompt_key(key, notifications);
            self.relayout(self.width, self.height);
            return MainAction::None;
        }

        if self.services.is_open() {
            return self.handle_overlay_key(key);
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.submit();
        }

        if let Focus::Field(field) = self.focus {
            if field.is_text() {
                if let Some(action) = self.handle_text_key(field, key) {
                    return action;
                }
            }
        }

        if self.focus == Focus::Attachment
            && matches!(
                key.code,
                KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace
            )
        {
            self.quote.form_mut().remove_attachment();
            self.relayout(self.width, self.height);
            return MainAction::None;
        }

        match StateManager::key_to_navigation(key) {
            NavigationAction::Quit => return MainAction::Quit,
            NavigationAction::Section(index) => {
                if let Some(section) = Section::all().get(index) {
                    self.focus = Focus::Page;
                    self.navigator.scroll_to_section(*section);
                }
            }
            NavigationAction::Top => {
                self.focus = Focus::Page;
                self.navigator.scroll_to_top();
            }
            NavigationAction::Up => match self.focus {
                Focus::Page => self.navigator.scroll_by(-1),
                focus => self.set_focus(focus.previous()),
            },
            NavigationAction::Down => match self.focus {
                Focus::Page => self.navigator.scroll_by(1),
                focus => self.set_focus(focus.next()),
            },
            NavigationAction::PageUp => self.navigator.page_up(),
            NavigationAction::PageDown => self.navigator.page_down(),
            NavigationAction::Next => self.set_focus(self.focus.next()),
            NavigationAction::Previous => self.set_focus(self.focus.previous()),
            NavigationAction::Left => match self.focus {
                Focus::Carousel => self.services.previous(),
                Focus::Field(FormField::Tipo) => self.quote.form_mut().cycle_tipo_previous(),
                _ => {}
            },
            NavigationAction::Right => match self.focus {
                Focus::Carousel => self.services.next(),
                Focus::Field(FormField::Tipo) => self.quote.form_mut().cycle_tipo_next(),
                _ => {}
            },
            NavigationAction::Select => match self.focus {
                // Hero call-to-action
                Focus::Page => {
                    self.navigator.scroll_to(Section::Sobre.id());
                }
                Focus::Carousel => self.services.open_current(),
                Focus::Field(FormField::Tipo) => self.quote.form_mut().cycle_tipo_next(),
                Focus::Field(_) => {}
                Focus::Attachment => self.quote.open_prompt(),
                Focus::Submit => return self.submit(),
            },
            NavigationAction::Back => self.focus = Focus::Page,
            NavigationAction::None => {}
        }

        self.relayout(self.width, self.height);
        MainAction::None
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> MainAction {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Back => self.services.close(),
            NavigationAction::Select => {
                // "Solicitar Orçamento"
                self.services.close();
                self.focus = Focus::Field(FormField::Nome);
                self.navigator.scroll_to(Section::Orcamento.id());
            }
            NavigationAction::Quit => return MainAction::Quit,
            _ => {}
        }
        MainAction::None
    }

    /// Keys typed into a text field. `None` lets navigation handle the key.
    fn handle_text_key(&mut self, field: FormField, key: KeyEvent) -> Option<MainAction> {
        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => return None,
            KeyCode::Char(c) => self.quote.form_mut().push_char(field, c),
            KeyCode::Backspace => self.quote.form_mut().pop_char(field),
            KeyCode::Enter if field == FormField::Mensagem => {
                self.quote.form_mut().push_char(field, '\n')
            }
            KeyCode::Enter => self.set_focus(self.focus.next()),
            KeyCode::Esc => self.focus = Focus::Page,
            _ => return None,
        }
        self.relayout(self.width, self.height);
        Some(MainAction::None)
    }

    /// Validate and hand out the payload, or point at the first problem
    fn submit(&mut self) -> MainAction {
        match self.quote.begin_submit() {
            Ok(payload) => {
                self.relayout(self.width, self.height);
                MainAction::Submit(payload)
            }
            Err(SubmitBlocked::Invalid(errors)) => {
                if let Some(first) = errors.first() {
                    self.set_focus(Focus::Field(first.field));
                }
                MainAction::None
            }
            Err(SubmitBlocked::InFlight) => MainAction::None,
        }
    }

    /// Settle the in-flight submission
    pub fn finish_submit(
        &mut self,
        outcome: &Result<(), SubmitError>,
        notifications: &mut NotificationCenter,
    ) {
        self.quote.finish_submit(outcome, notifications);
        self.relayout(self.width, self.height);
    }

    fn document(&self, width: usize) -> Document {
        let width = width.max(20);
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut anchors = Vec::new();
        let mut focus_rows = HashMap::new();

        let body = |text: &str, lines: &mut Vec<Line<'static>>| {
            lines.extend(
                wrap(text, width)
                    .into_iter()
                    .map(|l| Line::styled(l, theme::STYLE_BODY)),
            );
        };

        // Home
        anchors.push((Section::Home, lines.len() as u16));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{HERO_TITLE} "), theme::STYLE_HEADING),
            Span::styled(HERO_HIGHLIGHT, theme::STYLE_ACCENT),
        ]));
        lines.push(Line::default());
        body(HERO_SUBTITLE, &mut lines);
        lines.push(Line::default());
        let cta_style = if self.focus == Focus::Page {
            theme::STYLE_FOCUSED
        } else {
            theme::STYLE_ACCENT
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[ {HERO_CTA} ↓ ]"), cta_style),
            Span::styled("  Enter", theme::STYLE_HELP),
        ]));
        lines.push(Line::default());

        // Sobre
        anchors.push((Section::Sobre, lines.len() as u16));
        lines.push(section_heading("Sobre Mim", width));
        lines.push(Line::default());
        for paragraph in ABOUT_PARAGRAPHS.iter().copied() {
            body(paragraph, &mut lines);
            lines.push(Line::default());
        }
        lines.push(Line::styled("Tecnologias", theme::STYLE_HEADING));
        for tech in TECH_LOGOS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", tech.name), theme::STYLE_TAG),
                Span::styled(format!(" {}", tech.logo_url), theme::STYLE_DIM),
            ]));
        }
        lines.push(Line::default());

        // Serviços
        anchors.push((Section::Servicos, lines.len() as u16));
        lines.push(section_heading("Serviços", width));
        lines.push(Line::default());
        body(SERVICES_INTRO, &mut lines);
        lines.push(Line::default());
        focus_rows.insert(Focus::Carousel, lines.len() as u16);
        lines.extend(self.services.card_lines(width, self.focus == Focus::Carousel));
        lines.push(Line::default());

        // Orçamento
        anchors.push((Section::Orcamento, lines.len() as u16));
        lines.push(section_heading("Solicite um Orçamento", width));
        lines.push(Line::default());
        body(QUOTE_INTRO, &mut lines);
        lines.push(Line::default());
        let form_start = lines.len() as u16;
        let quote = self.quote.lines(self.focus, width);
        focus_rows.extend(quote.rows.into_iter().map(|(f, row)| (f, row + form_start)));
        lines.extend(quote.lines);
        lines.push(Line::default());

        // Contato
        anchors.push((Section::Contato, lines.len() as u16));
        lines.push(section_heading("Contato", width));
        lines.push(Line::default());
        body(CONTACT_INTRO, &mut lines);
        lines.push(Line::default());
        for link in SOCIAL_LINKS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", link.label), theme::STYLE_ACCENT),
                Span::styled(link.url, theme::STYLE_BODY),
            ]));
        }
        lines.push(Line::default());

        // Footer
        lines.push(Line::styled("─".repeat(width), theme::STYLE_DIM));
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "© {} {}. Todos os direitos reservados.",
                    chrono::Local::now().year(),
                    OWNER_NAME
                ),
                theme::STYLE_DIM,
            ),
            Span::styled("   ↑ topo (t)", theme::STYLE_HELP),
        ]));

        Document {
            lines,
            anchors,
            focus_rows,
        }
    }

    /// Render the main screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let body = chunks[1].inner(&Margin {
            horizontal: 2,
            vertical: 0,
        });
        if body.width != self.width || body.height != self.height {
            self.relayout(body.width, body.height);
        }
        let doc = self.document(body.width as usize);

        self.render_nav(f, chunks[0]);
        f.render_widget(
            Paragraph::new(doc.lines).scroll((self.navigator.offset(), 0)),
            body,
        );
        self.render_help(f, chunks[2]);

        self.services.render_overlay(f, size);
        self.quote.render_prompt(f, size);
    }

    fn render_nav(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Section::all()
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.label())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.navigator.active().index())
            .style(theme::STYLE_BODY)
            .highlight_style(theme::STYLE_ACCENT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::STYLE_DIM)
                    .title(format!(" {OWNER_INITIALS} "))
                    .title_style(theme::STYLE_ACCENT),
            );
        f.render_widget(tabs, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let text = if self.services.is_open() {
            "Enter: Solicitar Orçamento  Esc: Fechar"
        } else if self.quote.is_prompt_open() {
            "Enter: Anexar  Esc: Cancelar"
        } else {
            match self.focus {
                Focus::Page => "1-5: Seções  ↑↓: Rolar  Tab: Campos  t: Topo  q: Sair",
                Focus::Carousel => "←→: Projetos  Enter: Detalhes  Tab: Próximo  Esc: Página",
                Focus::Field(FormField::Tipo) => "←→: Tipo de serviço  Tab: Próximo  Ctrl+S: Enviar",
                Focus::Field(_) => "Digite  Tab: Próximo  Esc: Página  Ctrl+S: Enviar",
                Focus::Attachment => "Enter: Escolher arquivo  x: Remover  Tab: Próximo",
                Focus::Submit => "Enter: Enviar  Tab: Próximo  Esc: Página",
            }
        };
        f.render_widget(
            Paragraph::new(text)
                .style(theme::STYLE_HELP)
                .alignment(Alignment::Center),
            area,
        );
    }
}

fn section_heading(title: &str, width: usize) -> Line<'static> {
    let rule = "─".repeat(width.saturating_sub(title.chars().count() + 4).min(40));
    Line::from(vec![
        Span::styled("── ", theme::STYLE_DIM),
        Span::styled(title.to_string(), theme::STYLE_ACCENT),
        Span::styled(format!(" {rule}"), theme::STYLE_DIM),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ServiceType;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(screen: &mut PortfolioScreen, notifications: &mut NotificationCenter, code: KeyCode) -> MainAction {
        screen.handle_key(key(code), notifications)
    }

    fn type_text(screen: &mut PortfolioScreen, notifications: &mut NotificationCenter, text: &str) {
        for c in text.chars() {
            press(screen, notifications, KeyCode::Char(c));
        }
    }

    fn settle(screen: &mut PortfolioScreen) {
        for _ in 0..200 {
            if !screen.navigator().is_animating() {
                return;
            }
            screen.tick();
        }
        panic!("scroll never settled");
    }

    fn center() -> NotificationCenter {
        NotificationCenter::new(Duration::from_secs(5))
    }

    #[test]
    fn test_every_section_is_anchored() {
        let screen = PortfolioScreen::new();
        let mut last = None;
        for section in Section::all() {
            let anchor = screen.navigator().anchor(section).unwrap();
            if let Some(prev) = last {
                assert!(anchor > prev);
            }
            last = Some(anchor);
        }
    }

    #[test]
    fn test_number_keys_scroll_to_section() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        press(&mut screen, &mut notifications, KeyCode::Char('4'));
        assert_eq!(screen.navigator().active(), Section::Orcamento);
        settle(&mut screen);
        assert_eq!(
            Some(screen.navigator().offset()),
            screen.navigator().anchor(Section::Orcamento)
        );

        press(&mut screen, &mut notifications, KeyCode::Char('t'));
        settle(&mut screen);
        assert_eq!(screen.navigator().offset(), 0);
    }

    #[test]
    fn test_hero_cta_goes_to_about() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        press(&mut screen, &mut notifications, KeyCode::Enter);
        assert_eq!(screen.navigator().active(), Section::Sobre);
    }

    #[test]
    fn test_overlay_request_quote_navigates_to_form() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        press(&mut screen, &mut notifications, KeyCode::Tab);
        assert_eq!(screen.focus(), Focus::Carousel);
        press(&mut screen, &mut notifications, KeyCode::Right);
        press(&mut screen, &mut notifications, KeyCode::Enter);
        assert_eq!(
            screen.services().selected_project().unwrap().title,
            "Aplicativos Mobile"
        );

        press(&mut screen, &mut notifications, KeyCode::Enter);
        assert!(!screen.services().is_open());
        assert_eq!(screen.navigator().active(), Section::Orcamento);
        assert_eq!(screen.focus(), Focus::Field(FormField::Nome));
    }

    #[test]
    fn test_escape_closes_overlay() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        screen.set_focus(Focus::Carousel);
        press(&mut screen, &mut notifications, KeyCode::Enter);
        assert!(screen.services().is_open());
        press(&mut screen, &mut notifications, KeyCode::Esc);
        assert!(!screen.services().is_open());
        assert_eq!(screen.navigator().active(), Section::Home);
    }

    #[test]
    fn test_text_fields_capture_letters() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        screen.set_focus(Focus::Field(FormField::Nome));
        let action = press(&mut screen, &mut notifications, KeyCode::Char('q'));
        assert!(matches!(action, MainAction::None));
        type_text(&mut screen, &mut notifications, "uel");
        assert_eq!(screen.quote().form().nome(), "quel");

        press(&mut screen, &mut notifications, KeyCode::Backspace);
        assert_eq!(screen.quote().form().nome(), "que");

        press(&mut screen, &mut notifications, KeyCode::Enter);
        assert_eq!(screen.focus(), Focus::Field(FormField::Contato));
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        screen.set_focus(Focus::Submit);
        let action = press(&mut screen, &mut notifications, KeyCode::Enter);
        assert!(matches!(action, MainAction::None));
        assert_eq!(screen.focus(), Focus::Field(FormField::Nome));
        assert_eq!(screen.quote().form().errors().len(), 4);
    }

    #[test]
    fn test_complete_form_yields_payload() {
        let mut screen = PortfolioScreen::new();
        let mut notifications = center();
        screen.set_focus(Focus::Field(FormField::Nome));
        type_text(&mut screen, &mut notifications, "Ana");
        press(&mut screen, &mut notifications, KeyCode::Tab);
        type_text(&mut screen, &mut notifications, "ana@x.com");
        press(&mut screen, &mut notifications, KeyCode::Tab);
        press(&mut screen, &mut notifications, KeyCode::Right);
        assert_eq!(screen.quote().form().tipo(), Some(ServiceType::Site));
        press(&mut screen, &mut notifications, KeyCode::Tab);
        type_text(&mut screen, &mut notifications, "Preciso de um site");

        let action = screen.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut notifications,
        );
        let MainAction::Submit(payload) = action else {
            panic!("expected a payload");
        };
        assert_eq!(payload.nome, "Ana");
        assert_eq!(payload.tipo.value(), "site");

        // in flight: a second attempt is refused
        screen.set_focus(Focus::Submit);
        let again = press(&mut screen, &mut notifications, KeyCode::Enter);
        assert!(matches!(again, MainAction::None));
    }

    #[test]
    fn test_render_smoke() {
        let mut screen = PortfolioScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("GV"));
        assert!(text.contains("Sobre"));
        assert!(text.contains(HERO_HIGHLIGHT));
    }
}
