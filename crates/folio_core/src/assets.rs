//! Resume document embedding.
//!
//! # Responsibility
//! - Resolve resume PDFs from disk and inline them as `data:` URIs so the
//!   rendered page stays a single self-contained file.
//!
//! # Invariants
//! - Embedding is fail-soft: a missing or unreadable document yields a slot
//!   without data, never an error that blocks the render.

use crate::model::site::ResumeDoc;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{info, warn};
use std::path::Path;

/// One resume as the page shows it: the column heading plus, when the source
/// file was readable, the document inlined as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeSlot {
    pub label: String,
    /// File name shown in the unavailable placeholder.
    pub file_name: String,
    pub data_uri: Option<String>,
}

/// Encodes raw PDF bytes as a `data:application/pdf` URI.
pub fn pdf_data_uri(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(bytes))
}

/// Loads one resume document, resolving its path against `base_dir`.
pub fn embed_resume(doc: &ResumeDoc, base_dir: &Path) -> ResumeSlot {
    let path = base_dir.join(&doc.path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| doc.path.clone());

    match std::fs::read(&path) {
        Ok(bytes) => {
            info!(
                "event=resume_embed module=assets status=ok label={} bytes={}",
                doc.label,
                bytes.len()
            );
            ResumeSlot {
                label: doc.label.clone(),
                file_name,
                data_uri: Some(pdf_data_uri(&bytes)),
            }
        }
        Err(err) => {
            warn!(
                "event=resume_embed module=assets status=warn label={} error={}",
                doc.label, err
            );
            ResumeSlot {
                label: doc.label.clone(),
                file_name,
                data_uri: None,
            }
        }
    }
}

/// Embeds every configured resume in order.
pub fn embed_resumes(docs: &[ResumeDoc], base_dir: &Path) -> Vec<ResumeSlot> {
    docs.iter().map(|doc| embed_resume(doc, base_dir)).collect()
}

#[cfg(test)]
mod tests {
    use super::{embed_resume, pdf_data_uri};
    use crate::model::site::ResumeDoc;

    #[test]
    fn data_uri_has_pdf_prefix_and_base64_payload() {
        let uri = pdf_data_uri(b"%PDF-1.4 minimal");
        assert!(uri.starts_with("data:application/pdf;base64,"));
        assert!(!uri.ends_with(','));
    }

    #[test]
    fn embeds_readable_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4").unwrap();

        let slot = embed_resume(
            &ResumeDoc {
                label: "Resume — Software".to_string(),
                path: "resume.pdf".to_string(),
            },
            dir.path(),
        );
        assert_eq!(slot.label, "Resume — Software");
        assert_eq!(slot.file_name, "resume.pdf");
        assert!(slot.data_uri.is_some());
    }

    #[test]
    fn missing_document_degrades_to_empty_slot() {
        let dir = tempfile::tempdir().unwrap();

        let slot = embed_resume(
            &ResumeDoc {
                label: "Resume — Electrical".to_string(),
                path: "missing/resume.pdf".to_string(),
            },
            dir.path(),
        );
        assert_eq!(slot.file_name, "resume.pdf");
        assert_eq!(slot.data_uri, None);
    }
}
