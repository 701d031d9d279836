//! Quote request section
//!
//! Renders the form as document lines and owns the attachment path prompt.
//! Submission itself is started and settled by the caller.

use super::{centered_rect, Focus};
use crate::app::theme;
use crate::form::{
    submit::{FAILURE_DESCRIPTION, FAILURE_TITLE, SUCCESS_DESCRIPTION, SUCCESS_TITLE},
    FormField, QuoteForm, QuotePayload, SubmitBlocked, SubmitError,
};
use crate::notify::NotificationCenter;
use crate::util::{format_bytes, truncate_chars, wrap};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::HashMap;

const ATTACHMENT_HINT: &str = "PDF, DOC, PNG, JPG ou ZIP (máx. 10MB)";

/// Form lines plus the row each focusable widget starts on
pub struct QuoteLines {
    pub lines: Vec<Line<'static>>,
    pub rows: HashMap<Focus, u16>,
}

#[derive(Debug, Default)]
pub struct QuoteScreen {
    form: QuoteForm,
    /// Path being typed for the attachment, when the prompt is open
    prompt: Option<String>,
}

impl QuoteScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuoteForm {
        &mut self.form
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(String::new());
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Feed a key to the open path prompt. Enter attaches the typed path;
    /// a refused file is reported and the previous attachment stays.
    pub fn handle_prompt_key(&mut self, key: KeyEvent, notifications: &mut NotificationCenter) {
        let Some(input) = self.prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            KeyCode::Enter => {
                let path = input.trim().to_string();
                self.prompt = None;
                if path.is_empty() {
                    return;
                }
                if let Err(err) = self.form.attach(&path) {
                    let (title, description) = err.notice();
                    notifications.error(title, description);
                }
            }
            _ => {}
        }
    }

    /// Try to start a submission. Refusals leave field errors on the form.
    pub fn begin_submit(&mut self) -> Result<QuotePayload, SubmitBlocked> {
        self.form.begin_submit()
    }

    /// Settle the submission and tell the visitor how it went
    pub fn finish_submit(
        &mut self,
        outcome: &Result<(), SubmitError>,
        notifications: &mut NotificationCenter,
    ) {
        match outcome {
            Ok(()) => {
                self.form.finish_submit(true);
                notifications.success(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
            }
            Err(err) => {
                tracing::warn!(error = %err, "quote submission failed");
                self.form.finish_submit(false);
                notifications.error(FAILURE_TITLE, FAILURE_DESCRIPTION);
            }
        }
    }

    /// Build the section body for the given width
    pub fn lines(&self, focus: Focus, width: usize) -> QuoteLines {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut rows = HashMap::new();

        for field in FormField::all() {
            let focused = focus == Focus::Field(field);
            rows.insert(Focus::Field(field), lines.len() as u16);

            let label_style = if focused {
                theme::STYLE_ACCENT
            } else {
                theme::STYLE_HEADING
            };
            lines.push(Line::styled(format!("{} *", field.label()), label_style));

            match field {
                FormField::Tipo => lines.push(self.tipo_line(focused)),
                FormField::Mensagem => {
                    lines.extend(self.mensagem_lines(focused, width));
                }
                _ => lines.push(self.input_line(field, focused, width)),
            }

            if let Some(message) = self.form.error_for(field) {
                lines.push(Line::styled(format!("  {message}"), theme::STYLE_ERROR));
            }
            lines.push(Line::default());
        }

        rows.insert(Focus::Attachment, lines.len() as u16);
        lines.push(Line::styled("Anexo (opcional)", theme::STYLE_HEADING));
        lines.push(self.attachment_line(focus == Focus::Attachment, width));
        lines.push(Line::styled(format!("  {ATTACHMENT_HINT}"), theme::STYLE_HELP));
        lines.push(Line::default());

        rows.insert(Focus::Submit, lines.len() as u16);
        lines.push(self.submit_line(focus == Focus::Submit));

        QuoteLines { lines, rows }
    }

    fn input_line(&self, field: FormField, focused: bool, width: usize) -> Line<'static> {
        let value = self.form.text(field);
        let max = width.saturating_sub(6).max(8);
        let (text, style) = if value.is_empty() {
            (field.placeholder().to_string(), theme::STYLE_DIM)
        } else {
            (truncate_chars(value, max), theme::STYLE_BODY)
        };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(if focused { "▸ " } else { "  " }, theme::STYLE_PRIMARY),
            Span::styled(text, style),
            Span::styled(cursor, theme::STYLE_PRIMARY),
        ])
    }

    fn mensagem_lines(&self, focused: bool, width: usize) -> Vec<Line<'static>> {
        let value = self.form.mensagem();
        let marker = if focused { "▸ " } else { "  " };
        if value.is_empty() {
            return vec![Line::from(vec![
                Span::styled(marker, theme::STYLE_PRIMARY),
                Span::styled(FormField::Mensagem.placeholder(), theme::STYLE_DIM),
            ])];
        }

        let wrapped = wrap(value, width.saturating_sub(4).max(8));
        let last = wrapped.len().saturating_sub(1);
        wrapped
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let mut spans = vec![
                    Span::styled(if i == 0 { marker } else { "  " }, theme::STYLE_PRIMARY),
                    Span::styled(text, theme::STYLE_BODY),
                ];
                if focused && i == last {
                    spans.push(Span::styled("▏", theme::STYLE_PRIMARY));
                }
                Line::from(spans)
            })
            .collect()
    }

    fn tipo_line(&self, focused: bool) -> Line<'static> {
        let (text, style) = match self.form.tipo() {
            Some(tipo) => (tipo.label().to_string(), theme::STYLE_BODY),
            None => (FormField::Tipo.placeholder().to_string(), theme::STYLE_DIM),
        };
        let arrows = if focused { theme::STYLE_PRIMARY } else { theme::STYLE_DIM };
        Line::from(vec![
            Span::styled(if focused { "▸ ‹ " } else { "  ‹ " }, arrows),
            Span::styled(text, style),
            Span::styled(" ›", arrows),
        ])
    }

    fn attachment_line(&self, focused: bool, width: usize) -> Line<'static> {
        let button = match self.form.attachment() {
            Some(_) => " Trocar arquivo ",
            None => " Anexar arquivo ",
        };
        let button_style = if focused {
            theme::STYLE_FOCUSED
        } else {
            theme::STYLE_TAG
        };

        let mut spans = vec![
            Span::styled(if focused { "▸ " } else { "  " }, theme::STYLE_PRIMARY),
            Span::styled(button, button_style),
        ];
        if let Some(attachment) = self.form.attachment() {
            let name = truncate_chars(&attachment.file_name, width.saturating_sub(36).max(8));
            spans.push(Span::styled(format!("  {name}"), theme::STYLE_BODY));
            spans.push(Span::styled(
                format!(" ({})", format_bytes(attachment.size)),
                theme::STYLE_DIM,
            ));
            spans.push(Span::styled("  x remove", theme::STYLE_HELP));
        }
        Line::from(spans)
    }

    fn submit_line(&self, focused: bool) -> Line<'static> {
        if self.form.is_submitting() {
            return Line::styled("  [ Enviando... ]", theme::STYLE_DISABLED);
        }
        let style = if focused {
            theme::STYLE_FOCUSED
        } else {
            theme::STYLE_ACCENT
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled("[ Enviar Orçamento ]", style),
        ])
    }

    /// Path prompt popup, when open
    pub fn render_prompt(&self, f: &mut Frame, area: Rect) {
        let Some(input) = self.prompt.as_deref() else {
            return;
        };
        let popup = centered_rect(70, 5, area);
        let block = Block::default()
            .title(" Anexar arquivo ")
            .title_style(theme::STYLE_ACCENT)
            .borders(Borders::ALL)
            .border_style(theme::STYLE_PRIMARY);
        let lines = vec![
            Line::from(vec![
                Span::styled(input.to_string(), theme::STYLE_BODY),
                Span::styled("▏", theme::STYLE_PRIMARY),
            ]),
            Line::styled("Caminho do arquivo · Enter anexa · Esc cancela", theme::STYLE_HELP),
        ];
        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
