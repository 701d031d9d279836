//! Section navigation
//!
//! The main screen is one tall document with anchored sections. Navigating
//! to a section eases the viewport towards its anchor over a few frames and
//! marks it active in the navigation bar.

use std::collections::HashMap;

/// Anchor-addressable regions of the main screen, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Sobre,
    Servicos,
    Orcamento,
    Contato,
}

impl Section {
    pub fn all() -> [Self; 5] {
        [
            Self::Home,
            Self::Sobre,
            Self::Servicos,
            Self::Orcamento,
            Self::Contato,
        ]
    }

    /// Anchor identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Sobre => "sobre",
            Self::Servicos => "servicos",
            Self::Orcamento => "orcamento",
            Self::Contato => "contato",
        }
    }

    /// Navigation bar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Sobre => "Sobre",
            Self::Servicos => "Serviços",
            Self::Orcamento => "Orçamento",
            Self::Contato => "Contato",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.id() == id)
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

/// Eases a scroll offset towards a target, a fraction of the gap per frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollAnimator {
    offset: u16,
    target: u16,
}

impl ScrollAnimator {
    /// Quarter of the remaining distance per frame, at least one line
    const EASE_DIVISOR: u16 = 4;

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    pub fn animate_to(&mut self, target: u16) {
        self.target = target;
    }

    /// Move immediately, cancelling any animation
    pub fn jump_to(&mut self, offset: u16) {
        self.offset = offset;
        self.target = offset;
    }

    /// Advance one frame
    pub fn step(&mut self) {
        if self.offset == self.target {
            return;
        }
        let distance = self.offset.abs_diff(self.target);
        let delta = distance.div_ceil(Self::EASE_DIVISOR).max(1);
        if self.offset < self.target {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }
    }
}

/// Viewport over the main screen document
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    anchors: HashMap<Section, u16>,
    active: Section,
    scroll: ScrollAnimator,
    document_height: u16,
    viewport_height: u16,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self {
            anchors: HashMap::new(),
            active: Section::Home,
            scroll: ScrollAnimator::default(),
            document_height: 0,
            viewport_height: 0,
        }
    }

    /// Record the layout produced by the last render
    pub fn set_layout(
        &mut self,
        anchors: impl IntoIterator<Item = (Section, u16)>,
        document_height: u16,
        viewport_height: u16,
    ) {
        self.anchors = anchors.into_iter().collect();
        self.document_height = document_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        if self.scroll.target() > max {
            self.scroll.animate_to(max);
        }
        if self.scroll.offset() > max {
            self.scroll.jump_to(max);
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    pub fn anchor(&self, section: Section) -> Option<u16> {
        self.anchors.get(&section).copied()
    }

    fn max_offset(&self) -> u16 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    /// Smooth-scroll to the section with this identifier and mark it active.
    ///
    /// Unknown identifiers, or sections missing from the current layout,
    /// leave everything untouched. Returns whether navigation happened.
    pub fn scroll_to(&mut self, id: &str) -> bool {
        match Section::from_id(id) {
            Some(section) => self.scroll_to_section(section),
            None => false,
        }
    }

    pub fn scroll_to_section(&mut self, section: Section) -> bool {
        let Some(anchor) = self.anchor(section) else {
            return false;
        };
        self.scroll.animate_to(anchor.min(self.max_offset()));
        self.active = section;
        tracing::debug!(section = section.id(), anchor, "scrolling to section");
        true
    }

    /// Smooth-scroll back to the first line
    pub fn scroll_to_top(&mut self) {
        self.scroll.animate_to(0);
    }

    /// Manual scroll by a signed number of lines, clamped to the document
    pub fn scroll_by(&mut self, lines: i32) {
        let next = (i32::from(self.scroll.offset()) + lines).clamp(0, i32::from(self.max_offset()));
        self.scroll.jump_to(next as u16);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport_height.saturating_sub(1).max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport_height.saturating_sub(1).max(1)));
    }

    /// Bring a document line into the viewport if it is outside it
    pub fn ensure_visible(&mut self, line: u16) {
        let top = self.scroll.target();
        let height = self.viewport_height.max(1);
        if line < top {
            self.scroll.animate_to(line);
        } else if line >= top + height {
            self.scroll
                .animate_to((line + 1 - height).min(self.max_offset()));
        }
    }

    /// Advance the scroll animation by one frame
    pub fn tick(&mut self) {
        self.scroll.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out() -> SectionNavigator {
        let mut nav = SectionNavigator::new();
        nav.set_layout(
            [
                (Section::Home, 0),
                (Section::Sobre, 20),
                (Section::Servicos, 45),
                (Section::Orcamento, 80),
                (Section::Contato, 120),
            ],
            140,
            30,
        );
        nav
    }

    fn settle(nav: &mut SectionNavigator) -> usize {
        let mut frames = 0;
        while nav.is_animating() {
            nav.tick();
            frames += 1;
            assert!(frames < 100, "scroll animation never settled");
        }
        frames
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("projetos"), None);
        assert_eq!(Section::Orcamento.index(), 3);
    }

    #[test]
    fn test_scroll_to_is_smooth_and_sets_active() {
        let mut nav = laid_out();
        assert!(nav.scroll_to("servicos"));
        assert_eq!(nav.active(), Section::Servicos);
        assert_eq!(nav.offset(), 0);

        nav.tick();
        let first = nav.offset();
        assert!(first > 0 && first < 45);

        let frames = settle(&mut nav);
        assert!(frames > 1);
        assert_eq!(nav.offset(), 45);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut nav = laid_out();
        nav.scroll_to("sobre");
        settle(&mut nav);

        assert!(!nav.scroll_to("nowhere"));
        assert_eq!(nav.active(), Section::Sobre);
        assert!(!nav.is_animating());
        assert_eq!(nav.offset(), 20);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let mut nav = SectionNavigator::new();
        assert!(!nav.scroll_to("contato"));
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn test_target_clamped_to_document_end() {
        let mut nav = laid_out();
        nav.scroll_to("contato");
        settle(&mut nav);
        assert_eq!(nav.offset(), 110);
    }

    #[test]
    fn test_scroll_to_top() {
        let mut nav = laid_out();
        nav.scroll_to("orcamento");
        settle(&mut nav);
        nav.scroll_to_top();
        settle(&mut nav);
        assert_eq!(nav.offset(), 0);
    }

    #[test]
    fn test_manual_scroll_clamps() {
        let mut nav = laid_out();
        nav.scroll_by(-5);
        assert_eq!(nav.offset(), 0);
        nav.scroll_by(500);
        assert_eq!(nav.offset(), 110);
        nav.page_up();
        assert_eq!(nav.offset(), 81);
    }

    #[test]
    fn test_ensure_visible() {
        let mut nav = laid_out();
        nav.ensure_visible(10);
        assert!(!nav.is_animating());

        nav.ensure_visible(50);
        settle(&mut nav);
        assert_eq!(nav.offset(), 21);

        nav.ensure_visible(5);
        settle(&mut nav);
        assert_eq!(nav.offset(), 5);
    }
}
