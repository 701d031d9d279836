//! Quote form attachment
//!
//! One optional file sent along with the quote request. Only a handful of
//! document and image formats are accepted, up to 10 MiB.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted attachment in bytes
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted extensions, compared case-insensitively
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "png", "jpg", "jpeg", "zip"];

/// Reasons a file is refused as attachment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("{name} is {size} bytes, above the {max} byte limit")]
    TooLarge { name: String, size: u64, max: u64 },
    #[error("{name} has an unsupported format")]
    UnsupportedExtension { name: String },
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl AttachmentError {
    /// Notification title and description shown to the visitor
    pub fn notice(&self) -> (&'static str, &'static str) {
        match self {
            Self::TooLarge { .. } => ("Arquivo muito grande", "O tamanho máximo é 10MB."),
            Self::UnsupportedExtension { .. } => {
                ("Formato não suportado", "Use PDF, DOC, PNG, JPG ou ZIP.")
            }
            Self::Unreadable { .. } => (
                "Arquivo não encontrado",
                "Verifique o caminho informado e tente novamente.",
            ),
        }
    }
}

/// A file accepted for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl Attachment {
    /// Inspect a file and accept it if it passes the format and size checks.
    ///
    /// The content is read only at submission time.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let metadata = fs::metadata(path).map_err(|e| AttachmentError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        if !metadata.is_file() {
            return Err(AttachmentError::Unreadable {
                path: path.display().to_string(),
                reason: "not a regular file".to_string(),
            });
        }

        if !has_allowed_extension(path) {
            return Err(AttachmentError::UnsupportedExtension { name: file_name });
        }

        let size = metadata.len();
        if size > MAX_ATTACHMENT_BYTES {
            return Err(AttachmentError::TooLarge {
                name: file_name,
                size,
                max: MAX_ATTACHMENT_BYTES,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size,
        })
    }

    /// MIME type sent with the multipart part
    pub fn mime_type(&self) -> &'static str {
        mime_for_extension(&extension_of(&self.path).unwrap_or_default())
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

pub fn has_allowed_extension(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn sized_file(dir: &TempDir, name: &str, len: u64) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap().set_len(len).unwrap();
        path
    }

    #[test]
    fn test_accepts_allowed_file() {
        let dir = TempDir::new().unwrap();
        let path = sized_file(&dir, "briefing.PDF", 2048);

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.file_name, "briefing.PDF");
        assert_eq!(attachment.size, 2048);
        assert_eq!(attachment.mime_type(), "application/pdf");
    }

    #[test]
    fn test_limit_is_inclusive() {
        let dir = TempDir::new().unwrap();
        let path = sized_file(&dir, "exact.zip", MAX_ATTACHMENT_BYTES);
        assert!(Attachment::from_path(&path).is_ok());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = sized_file(&dir, "huge.png", MAX_ATTACHMENT_BYTES + 1);

        let err = Attachment::from_path(&path).unwrap_err();
        assert!(matches!(err, AttachmentError::TooLarge { size, .. } if size == MAX_ATTACHMENT_BYTES + 1));
        assert_eq!(err.notice().0, "Arquivo muito grande");
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = sized_file(&dir, "script.exe", 10);
        assert!(matches!(
            Attachment::from_path(&path),
            Err(AttachmentError::UnsupportedExtension { .. })
        ));

        let path = sized_file(&dir, "noextension", 10);
        assert!(Attachment::from_path(&path).is_err());
    }

    #[test]
    fn test_rejects_missing_file_and_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Attachment::from_path(dir.path().join("ghost.pdf")),
            Err(AttachmentError::Unreadable { .. })
        ));
        assert!(matches!(
            Attachment::from_path(dir.path()),
            Err(AttachmentError::Unreadable { .. })
        ));
    }
}
