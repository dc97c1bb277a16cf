//! Multipart form parsing for document submissions.

use axum::extract::Multipart;

use paperlens_core::{Error, Result};

/// The uploaded document part of a multipart request.
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Fields accepted by the upload and check endpoints.
#[derive(Default)]
pub struct SubmissionForm {
    pub paper_id: Option<String>,
    pub file: Option<UploadedFile>,
}

/// Drain a multipart stream into the fields we care about.
///
/// Unknown fields are ignored; transport-level multipart errors are
/// caller input errors.
pub async fn read_submission(mut multipart: Multipart) -> Result<SubmissionForm> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("paper_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("unreadable paper_id: {e}")))?;
                form.paper_id = Some(value);
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("unreadable file: {e}")))?
                    .to_vec();
                form.file = Some(UploadedFile { filename, bytes });
            }
            _ => {}
        }
    }

    Ok(form)
}

impl SubmissionForm {
    /// The document part, validated: present, named, non-empty.
    pub fn require_file(self) -> Result<UploadedFile> {
        let file = self
            .file
            .ok_or_else(|| Error::Validation("no file uploaded".to_string()))?;
        if file.filename.is_empty() {
            return Err(Error::Validation("empty filename".to_string()));
        }
        if file.bytes.is_empty() {
            return Err(Error::Validation("empty file".to_string()));
        }
        Ok(file)
    }
}
