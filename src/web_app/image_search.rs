// web_app/image_search.rs - Image search helpers shared by the modal and results view

use crate::web_app::model::ImageAnalysis;
use crate::web_app::query::browse_category_href;

/// Largest upload accepted by the modal (10 MiB)
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Formats advertised under the drop zone
pub const SUPPORTED_FORMATS: &str = "JPG, PNG, GIF";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageRejection {
    NotAnImage(String),
    TooLarge(u64),
}

impl std::fmt::Display for ImageRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRejection::NotAnImage(mime) => write!(f, "not an image: {}", mime),
            ImageRejection::TooLarge(size) => {
                write!(f, "image is {} bytes, limit is {}", size, MAX_IMAGE_BYTES)
            }
        }
    }
}

/// Accept only `image/*` files up to `MAX_IMAGE_BYTES`
pub fn validate_image(mime: &str, size: u64) -> Result<(), ImageRejection> {
    if !mime.starts_with("image/") {
        return Err(ImageRejection::NotAnImage(mime.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge(size));
    }
    Ok(())
}

/// First character upper-cased, the rest lower-cased
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Preview URL to release when the shown image changes from `current` to
/// `next`. Handing the same URL on (upload modal to results view) keeps it.
pub fn superseded_preview(current: Option<&str>, next: Option<&str>) -> Option<String> {
    match current {
        Some(url) if next != Some(url) => Some(url.to_string()),
        _ => None,
    }
}

impl ImageAnalysis {
    /// Detected category as shown to the user, `None` when blank
    pub fn display_category(&self) -> Option<String> {
        let trimmed = self.category.trim();
        (!trimmed.is_empty()).then(|| capitalize_first_letter(trimmed))
    }

    /// Confidence as a whole percentage
    pub fn confidence_percent(&self) -> Option<u32> {
        self.confidence
            .filter(|c| c.is_finite())
            .map(|c| (c.clamp(0.0, 1.0) * 100.0).round() as u32)
    }

    /// Where "Browse Category" leads
    pub fn browse_href(&self) -> Option<String> {
        self.display_category().map(|c| browse_category_href(&c))
    }

    /// Pretty-printed response for the raw details panel
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize_first_letter("sHOES"), "Shoes");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("é"), "É");
    }

    #[test]
    fn test_validate_image() {
        assert!(validate_image("image/png", 1024).is_ok());
        assert_eq!(
            validate_image("application/pdf", 10),
            Err(ImageRejection::NotAnImage("application/pdf".into()))
        );
        assert_eq!(
            validate_image("image/jpeg", MAX_IMAGE_BYTES + 1),
            Err(ImageRejection::TooLarge(MAX_IMAGE_BYTES + 1))
        );
        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES).is_ok());
    }
}
