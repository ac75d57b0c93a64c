/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::FALLBACK_MIME_TYPE;
use crate::error::AppError;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Multipart form with a `file` field read from disk and extra text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    file: PathBuf,
    fields: Vec<(String, String)>,
}

impl UploadForm {
    /// Creates a form uploading `file`
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a text field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Path of the uploaded file
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Text fields sent alongside the file
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Renders the form for diagnostics, without the file content
    pub fn describe(&self) -> String {
        let mut parts = vec![format!("file={}", self.file.display())];
        parts.extend(self.fields.iter().map(|(k, v)| format!("{k}={v}")));
        parts.join(", ")
    }

    /// Reads the file and builds the transport form
    pub async fn into_multipart(self) -> Result<Form, AppError> {
        let data = tokio::fs::read(&self.file).await?;
        let mime = sniff_mime(&data);
        let file_name = self
            .file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        debug!("Uploading {} as {} ({} bytes)", file_name, mime, data.len());

        let part = Part::bytes(data).file_name(file_name).mime_str(&mime)?;
        let mut form = Form::new().part("file", part);
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

/// Detects the MIME type of a file from its leading bytes
pub fn sniff_mime(bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_owned();
    }

    FALLBACK_MIME_TYPE.to_owned()
}

/// Media file attached to a product or product model attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFileUpload {
    /// Product identifier, or product model code
    pub identifier: String,
    /// Attribute receiving the file
    pub attribute: String,
    /// File to upload
    pub file: PathBuf,
    /// Locale of the attribute value, for localizable attributes
    pub locale: Option<String>,
    /// Channel of the attribute value, for scopable attributes
    pub scope: Option<String>,
    /// Targets a product model instead of a product
    pub is_model: bool,
}

impl ProductFileUpload {
    /// Builds the multipart form expected by the media files endpoint
    ///
    /// Products are described in a `product` field keyed by `identifier`,
    /// product models in a `product_model` field keyed by `code`.
    pub fn to_form(&self) -> UploadForm {
        let (field, key) = if self.is_model {
            ("product_model", "code")
        } else {
            ("product", "identifier")
        };
        let mut description = Map::new();
        description.insert(key.to_string(), json!(self.identifier));
        description.insert("attribute".to_string(), json!(self.attribute));
        description.insert("locale".to_string(), json!(self.locale));
        description.insert("scope".to_string(), json!(self.scope));
        UploadForm::new(&self.file).field(field, Value::Object(description).to_string())
    }
}
