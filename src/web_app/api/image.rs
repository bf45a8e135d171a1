// web_app/api/image.rs - Image analysis upload
//
// Compiled for both targets: the browser uploads straight to the analyzer,
// the server-side tests exercise the same code natively.

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::errors::{check_status, ApiError};
use crate::web_app::image_search::validate_image;
use crate::web_app::model::ImageAnalysis;

/// Multipart field the analyzer reads the file from
pub const IMAGE_FIELD: &str = "image";

/// An image picked by the user, already read into memory
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct ImageAnalyzer {
    http: Client,
    endpoint: String,
}

impl ImageAnalyzer {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one image and return the detected category. No retry.
    pub async fn analyze(&self, upload: ImageUpload) -> Result<ImageAnalysis, ApiError> {
        validate_image(&upload.mime, upload.bytes.len() as u64)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        tracing::info!(
            file = %upload.file_name,
            size = upload.bytes.len(),
            endpoint = %self.endpoint,
            "uploading image for analysis"
        );

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.as_str())
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;
        let analysis = response.json::<ImageAnalysis>().await?;

        tracing::info!(
            category = %analysis.category,
            confidence = ?analysis.confidence,
            "image analysis result"
        );
        Ok(analysis)
    }
}
