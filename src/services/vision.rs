//! Client for the Cloud Vision `images:annotate` endpoint.
//!
//! Only the fields this service reads or writes are modelled; everything
//! else in the provider's response is ignored.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct AnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
    pub image_context: ImageContext,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    /// Base64-encoded image bytes, passed through untouched.
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub max_results: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContext {
    pub language_hints: Vec<&'static str>,
}

// The provider may send `null` where a list is expected; treat it as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct AnnotateResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub responses: Vec<Option<AnnotateImageResponse>>,
    pub error: Option<ProviderStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_annotations: Vec<EntityAnnotation>,
}

#[derive(Debug, Deserialize)]
pub struct EntityAnnotation {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderStatus {
    pub code: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl VisionClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    /// One POST per call. The body is decoded whatever the HTTP status,
    /// since provider failures arrive as an `error` object.
    pub async fn annotate(
        &self,
        api_key: &str,
        request: &AnnotateRequest,
    ) -> Result<AnnotateResponse, reqwest::Error> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "vision api responded");
        response.json::<AnnotateResponse>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_without_responses_field_is_empty() {
        let parsed: AnnotateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.responses.is_empty());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn reads_provider_error_object() {
        let parsed: AnnotateResponse = serde_json::from_str(
            r#"{"error":{"code":400,"message":"Bad image data","status":"INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        let err = parsed.error.unwrap();
        assert_eq!(err.code, Some(400));
        assert_eq!(err.message.as_deref(), Some("Bad image data"));
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let parsed: AnnotateResponse = serde_json::from_str(r#"{"responses":null}"#).unwrap();
        assert!(parsed.responses.is_empty());

        let parsed: AnnotateResponse =
            serde_json::from_str(r#"{"responses":[null,{"textAnnotations":null}]}"#).unwrap();
        assert!(parsed.responses[0].is_none());
        assert!(parsed.responses[1].as_ref().unwrap().text_annotations.is_empty());
    }

    #[test]
    fn annotation_without_description_is_malformed() {
        let parsed = serde_json::from_str::<AnnotateResponse>(
            r#"{"responses":[{"textAnnotations":[{"locale":"zh"}]}]}"#,
        );
        assert!(parsed.is_err());
    }
}
