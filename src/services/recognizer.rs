use crate::error::AppError;

use super::vision::{
    AnnotateImageRequest, AnnotateRequest, AnnotateResponse, Feature, ImageContent, ImageContext,
    VisionClient,
};

pub const LANGUAGE_HINTS: [&str; 2] = ["zh-TW", "zh"];

pub fn build_request(image_base64: &str) -> AnnotateRequest {
    AnnotateRequest {
        requests: vec![AnnotateImageRequest {
            image: ImageContent { content: image_base64.to_string() },
            features: vec![Feature { kind: "DOCUMENT_TEXT_DETECTION", max_results: 1 }],
            image_context: ImageContext { language_hints: LANGUAGE_HINTS.to_vec() },
        }],
    }
}

/// Leading character after trimming, or `None` if nothing is left.
pub fn first_character(text: &str) -> Option<String> {
    text.trim().chars().next().map(String::from)
}

/// Only the first annotation of the first sub-response is consulted.
pub fn extract_text(response: &AnnotateResponse) -> Result<Option<String>, AppError> {
    if let Some(status) = &response.error {
        return Err(AppError::Upstream(status.message.clone()));
    }

    Ok(response
        .responses
        .first()
        .and_then(Option::as_ref)
        .and_then(|r| r.text_annotations.first())
        .and_then(|a| first_character(&a.description)))
}

pub async fn recognize(
    vision: &VisionClient,
    api_key: &str,
    image_base64: &str,
) -> Result<Option<String>, AppError> {
    let request = build_request(image_base64);
    let response = vision.annotate(api_key, &request).await?;
    let text = extract_text(&response)?;
    tracing::info!(found = text.is_some(), "recognition finished");
    Ok(text)
}
