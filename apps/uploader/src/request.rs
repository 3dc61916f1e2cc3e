use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::form::SelectedFile;

/// Name of the single multipart field carrying the resume.
pub const RESUME_FIELD: &str = "resume";

/// Path of the summarization endpoint, relative to the service base URL.
pub const SUMMARIZE_PATH: &str = "/summarize";

/// One upload: exactly one multipart part named `resume`.
/// Built fresh for every submission and dropped once the request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    file: SelectedFile,
}

impl UploadRequest {
    pub fn new(file: SelectedFile) -> Self {
        Self { file }
    }

    pub fn field(&self) -> &'static str {
        RESUME_FIELD
    }

    pub fn file_name(&self) -> &str {
        &self.file.name
    }

    pub fn bytes(&self) -> &Bytes {
        &self.file.bytes
    }

    /// Encodes the request as a multipart form. The content type header is
    /// the only header the caller needs; reqwest derives it from the form.
    pub fn into_form(self) -> Form {
        let part = Part::bytes(self.file.bytes.to_vec()).file_name(self.file.name);
        Form::new().part(RESUME_FIELD, part)
    }
}

/// Joins a base URL and the summarize path without doubling slashes.
pub fn summarize_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUMMARIZE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_url_plain_base() {
        assert_eq!(
            summarize_url("http://127.0.0.1:5000"),
            "http://127.0.0.1:5000/summarize"
        );
    }

    #[test]
    fn test_summarize_url_trailing_slash() {
        assert_eq!(
            summarize_url("http://127.0.0.1:5000/"),
            "http://127.0.0.1:5000/summarize"
        );
    }

    #[test]
    fn test_request_keeps_file_bytes() {
        let req = UploadRequest::new(SelectedFile::new("a.docx", vec![1u8, 2, 3]));
        assert_eq!(req.field(), "resume");
        assert_eq!(req.bytes().as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_form_has_boundary() {
        let req = UploadRequest::new(SelectedFile::new("a.pdf", vec![0u8; 4]));
        let form = req.into_form();
        assert!(!form.boundary().is_empty());
    }
}
