//! Multipart handling for the upload endpoint

use axum::extract::{multipart::MultipartRejection, Multipart};
use bytes::Bytes;
use vimeo_gateway_core::AppError;

use crate::constants::UPLOAD_FIELD;

/// The single file part of an upload request, fully buffered.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl UploadedFile {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Extract the `file` part from a multipart form.
///
/// Exactly one non-empty `file` part is accepted. Other fields are ignored.
pub async fn extract_multipart_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile, AppError> {
    let mut multipart = multipart.map_err(|e| {
        AppError::Validation(format!("Expected a multipart/form-data body: {}", e.body_text()))
    })?;

    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if file.is_some() {
            return Err(AppError::Validation(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file data: {}", e)))?;

        file = Some(UploadedFile {
            data,
            filename,
            content_type,
        });
    }

    let file = file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if file.data.is_empty() {
        return Err(AppError::Validation("File is empty".to_string()));
    }

    Ok(file)
}
