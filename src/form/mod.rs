//! Quote request form
//!
//! Holds what the visitor typed, validates it locally, and tracks the one
//! submission that may be in flight at a time. Sending is done by
//! [`submit::QuoteClient`]; this module only decides whether a submission
//! may start and what happens to the fields once it ends.

pub mod attachment;
pub mod submit;

pub use attachment::{Attachment, AttachmentError};
pub use submit::{QuoteClient, QuotePayload, SubmitError};

use std::path::Path;

pub const MAX_NOME_CHARS: usize = 100;
pub const MAX_CONTATO_CHARS: usize = 100;
pub const MAX_MENSAGEM_CHARS: usize = 1000;

/// Kind of work being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Site,
    Aplicativo,
    Automacao,
    Api,
}

impl ServiceType {
    pub fn all() -> [Self; 4] {
        [Self::Site, Self::Aplicativo, Self::Automacao, Self::Api]
    }

    /// Value sent in the `tipo` field
    pub fn value(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Aplicativo => "aplicativo",
            Self::Automacao => "automacao",
            Self::Api => "api",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Site => "Site",
            Self::Aplicativo => "Aplicativo",
            Self::Automacao => "Automação",
            Self::Api => "API",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.value() == value)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or_default();
        all[(idx + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or_default();
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Required fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Nome,
    Contato,
    Tipo,
    Mensagem,
}

impl FormField {
    pub fn all() -> [Self; 4] {
        [Self::Nome, Self::Contato, Self::Tipo, Self::Mensagem]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nome => "Nome",
            Self::Contato => "Contato",
            Self::Tipo => "Tipo de Serviço",
            Self::Mensagem => "Mensagem",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Nome => "Seu nome",
            Self::Contato => "Telefone ou email",
            Self::Tipo => "Selecione o tipo de serviço",
            Self::Mensagem => "Descreva seu projeto ou ideia...",
        }
    }

    /// Whether the field accepts typed text
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Tipo)
    }
}

/// A violated constraint on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Why a submission could not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not resolved yet
    InFlight,
    /// Local validation failed; nothing was sent
    Invalid(Vec<FieldError>),
}

/// Ephemeral state of the quote form
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    nome: String,
    contato: String,
    tipo: Option<ServiceType>,
    mensagem: String,
    attachment: Option<Attachment>,
    errors: Vec<FieldError>,
    /// Set after the first submit attempt; edits then revalidate
    attempted: bool,
    submitting: bool,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn contato(&self) -> &str {
        &self.contato
    }

    pub fn tipo(&self) -> Option<ServiceType> {
        self.tipo
    }

    pub fn mensagem(&self) -> &str {
        &self.mensagem
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current text of a text field; empty for the selector
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Nome => &self.nome,
            FormField::Contato => &self.contato,
            FormField::Mensagem => &self.mensagem,
            FormField::Tipo => "",
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Nome => Some(&mut self.nome),
            FormField::Contato => Some(&mut self.contato),
            FormField::Mensagem => Some(&mut self.mensagem),
            FormField::Tipo => None,
        }
    }

    /// Replace a text field's content
    pub fn set_text(&mut self, field: FormField, value: &str) {
        if let Some(text) = self.text_mut(field) {
            *text = value.to_string();
            self.after_edit();
        }
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
            self.after_edit();
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
            self.after_edit();
        }
    }

    pub fn set_tipo(&mut self, tipo: Option<ServiceType>) {
        self.tipo = tipo;
        self.after_edit();
    }

    /// Step the selector forward, starting at the first option
    pub fn cycle_tipo_next(&mut self) {
        let next = self.tipo.map_or(ServiceType::Site, |t| t.next());
        self.set_tipo(Some(next));
    }

    pub fn cycle_tipo_previous(&mut self) {
        let previous = self.tipo.map_or(ServiceType::Api, |t| t.previous());
        self.set_tipo(Some(previous));
    }

    fn after_edit(&mut self) {
        if self.attempted {
            self.errors = self.check();
        }
    }

    /// Attach a file. A refused file leaves the current attachment in place.
    pub fn attach(&mut self, path: impl AsRef<Path>) -> Result<&Attachment, AttachmentError> {
        match Attachment::from_path(path.as_ref()) {
            Ok(attachment) => {
                tracing::info!(file = %attachment.file_name, size = attachment.size, "attachment accepted");
                Ok(self.attachment.insert(attachment))
            }
            Err(err) => {
                tracing::warn!(error = %err, "attachment rejected");
                Err(err)
            }
        }
    }

    pub fn remove_attachment(&mut self) {
        self.attachment = None;
    }

    /// Check every constraint, collecting one error per violated field
    pub fn check(&self) -> Vec<FieldError> {
        let tipo = match self.tipo {
            Some(_) => None,
            None => Some(FieldError {
                field: FormField::Tipo,
                message: "Selecione um tipo de serviço",
            }),
        };

        [
            check_text(
                FormField::Nome,
                &self.nome,
                MAX_NOME_CHARS,
                "Nome é obrigatório",
                "Nome muito longo",
            ),
            check_text(
                FormField::Contato,
                &self.contato,
                MAX_CONTATO_CHARS,
                "Contato é obrigatório",
                "Contato muito longo",
            ),
            tipo,
            check_text(
                FormField::Mensagem,
                &self.mensagem,
                MAX_MENSAGEM_CHARS,
                "Mensagem é obrigatória",
                "Mensagem muito longa",
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Validate and, if allowed, mark the form in flight and hand out the
    /// payload to send. Field errors are kept for display.
    pub fn begin_submit(&mut self) -> Result<QuotePayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.attempted = true;
        self.errors = self.check();
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "quote form failed validation");
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }

        let tipo = self.tipo.ok_or_else(|| SubmitBlocked::Invalid(self.errors.clone()))?;
        self.submitting = true;
        Ok(QuotePayload {
            nome: self.nome.trim().to_string(),
            contato: self.contato.trim().to_string(),
            tipo,
            mensagem: self.mensagem.trim().to_string(),
            attachment: self.attachment.clone(),
        })
    }

    /// Settle the in-flight submission: success clears everything,
    /// failure keeps the entered data for another try.
    pub fn finish_submit(&mut self, delivered: bool) {
        self.submitting = false;
        if delivered {
            self.reset();
        }
    }

    /// Back to an empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Required, trimmed, and at most `max` characters
fn check_text(
    field: FormField,
    value: &str,
    max: usize,
    empty: &'static str,
    too_long: &'static str,
) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError { field, message: empty })
    } else if trimmed.chars().count() > max {
        Some(FieldError { field, message: too_long })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn filled() -> QuoteForm {
        let mut form = QuoteForm::new();
        form.set_text(FormField::Nome, "Ana");
        form.set_text(FormField::Contato, "ana@x.com");
        form.set_tipo(Some(ServiceType::Site));
        form.set_text(FormField::Mensagem, "Preciso de um site");
        form
    }

    #[test]
    fn test_service_type_values() {
        assert_eq!(ServiceType::from_value("site"), Some(ServiceType::Site));
        assert_eq!(ServiceType::from_value("automacao"), Some(ServiceType::Automacao));
        assert_eq!(ServiceType::from_value("app"), None);
        assert_eq!(ServiceType::Api.next(), ServiceType::Site);
        assert_eq!(ServiceType::Site.previous(), ServiceType::Api);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = QuoteForm::new();
        let blocked = form.begin_submit().unwrap_err();

        let SubmitBlocked::Invalid(errors) = blocked else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 4);
        assert_eq!(form.error_for(FormField::Nome), Some("Nome é obrigatório"));
        assert_eq!(form.error_for(FormField::Contato), Some("Contato é obrigatório"));
        assert_eq!(form.error_for(FormField::Tipo), Some("Selecione um tipo de serviço"));
        assert_eq!(form.error_for(FormField::Mensagem), Some("Mensagem é obrigatória"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set_text(FormField::Contato, "   ");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.error_for(FormField::Contato), Some("Contato é obrigatório"));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_length_limits() {
        let mut form = filled();
        form.set_text(FormField::Nome, &"a".repeat(MAX_NOME_CHARS + 1));
        form.set_text(FormField::Mensagem, &"m".repeat(MAX_MENSAGEM_CHARS + 1));
        assert!(form.begin_submit().is_err());
        assert_eq!(form.error_for(FormField::Nome), Some("Nome muito longo"));
        assert_eq!(form.error_for(FormField::Mensagem), Some("Mensagem muito longa"));

        form.set_text(FormField::Nome, &"ã".repeat(MAX_NOME_CHARS));
        form.set_text(FormField::Mensagem, &"m".repeat(MAX_MENSAGEM_CHARS));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_edits_revalidate_after_first_attempt() {
        let mut form = QuoteForm::new();
        form.set_text(FormField::Nome, "A");
        assert!(form.errors().is_empty());

        form.begin_submit().unwrap_err();
        assert!(form.error_for(FormField::Contato).is_some());

        form.set_text(FormField::Contato, "ana@x.com");
        assert!(form.error_for(FormField::Contato).is_none());
        assert!(form.error_for(FormField::Mensagem).is_some());
    }

    #[test]
    fn test_payload_is_trimmed() {
        let mut form = filled();
        form.set_text(FormField::Nome, "  Ana  ");
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.nome, "Ana");
        assert_eq!(payload.tipo, ServiceType::Site);
        assert!(payload.attachment.is_none());
    }

    #[test]
    fn test_in_flight_blocks_second_submit() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
    }

    #[test]
    fn test_success_resets_everything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.pdf");
        File::create(&path).unwrap().set_len(10).unwrap();

        let mut form = filled();
        form.attach(&path).unwrap();
        form.begin_submit().unwrap();
        form.finish_submit(true);

        assert!(!form.is_submitting());
        assert_eq!(form.nome(), "");
        assert_eq!(form.contato(), "");
        assert_eq!(form.tipo(), None);
        assert_eq!(form.mensagem(), "");
        assert!(form.attachment().is_none());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_failure_keeps_entered_data() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(false);

        assert!(!form.is_submitting());
        assert_eq!(form.nome(), "Ana");
        assert_eq!(form.tipo(), Some(ServiceType::Site));
        assert_eq!(form.mensagem(), "Preciso de um site");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_rejected_attachment_keeps_previous() {
        let dir = TempDir::new().unwrap();
        let small = dir.path().join("small.png");
        File::create(&small).unwrap().set_len(100).unwrap();
        let big = dir.path().join("big.png");
        File::create(&big)
            .unwrap()
            .set_len(attachment::MAX_ATTACHMENT_BYTES + 1)
            .unwrap();

        let mut form = QuoteForm::new();
        form.attach(&small).unwrap();
        let err = form.attach(&big).unwrap_err();

        assert!(matches!(err, AttachmentError::TooLarge { .. }));
        assert_eq!(form.attachment().unwrap().file_name, "small.png");

        form.remove_attachment();
        assert!(form.attachment().is_none());
    }

    #[test]
    fn test_tipo_cycles_from_unset() {
        let mut form = QuoteForm::new();
        form.cycle_tipo_next();
        assert_eq!(form.tipo(), Some(ServiceType::Site));

        let mut form = QuoteForm::new();
        form.cycle_tipo_previous();
        assert_eq!(form.tipo(), Some(ServiceType::Api));
    }
}
