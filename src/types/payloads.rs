use serde::Deserialize;

use crate::error::RelayError;
use crate::providers::ResponseShape;

/// `{"url": "..."}`, also the element type of the array shapes.
#[derive(Debug, Deserialize)]
pub struct UrlObject {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope {
    pub results: Vec<UrlObject>,
}

#[derive(Debug, Deserialize)]
pub struct ImagesEnvelope {
    pub images: Vec<UrlObject>,
}

#[derive(Debug, Deserialize)]
pub struct CredentialedImage {
    pub image: String,
}

fn non_empty(url: String) -> Result<String, RelayError> {
    if url.trim().is_empty() {
        Err(RelayError::EmptyPayload)
    } else {
        Ok(url)
    }
}

fn first_url(items: Vec<UrlObject>) -> Result<String, RelayError> {
    items
        .into_iter()
        .next()
        .ok_or(RelayError::EmptyPayload)
        .and_then(|item| non_empty(item.url))
}

impl ResponseShape {
    /// Pull the image URL out of a raw provider body.
    pub fn extract_url(self, body: &[u8]) -> Result<String, RelayError> {
        match self {
            ResponseShape::SimpleObject => {
                non_empty(serde_json::from_slice::<UrlObject>(body)?.url)
            }
            ResponseShape::ResultsArray => {
                first_url(serde_json::from_slice::<ResultsEnvelope>(body)?.results)
            }
            ResponseShape::ImagesArray => {
                first_url(serde_json::from_slice::<ImagesEnvelope>(body)?.images)
            }
            ResponseShape::Credentialed => {
                non_empty(serde_json::from_slice::<CredentialedImage>(body)?.image)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_shape_reads_its_field() {
        assert_eq!(
            ResponseShape::SimpleObject
                .extract_url(br#"{"url":"https://i.waifu.pics/a.png"}"#)
                .unwrap(),
            "https://i.waifu.pics/a.png"
        );
        assert_eq!(
            ResponseShape::ResultsArray
                .extract_url(br#"{"results":[{"url":"r1","anime_name":"x"},{"url":"r2"}]}"#)
                .unwrap(),
            "r1"
        );
        assert_eq!(
            ResponseShape::ImagesArray
                .extract_url(br#"{"images":[{"url":"i1","is_nsfw":false}]}"#)
                .unwrap(),
            "i1"
        );
        assert_eq!(
            ResponseShape::Credentialed
                .extract_url(br#"{"image":"c1"}"#)
                .unwrap(),
            "c1"
        );
    }

    #[test]
    fn empty_arrays_and_urls_are_failures() {
        assert!(matches!(
            ResponseShape::ResultsArray.extract_url(br#"{"results":[]}"#),
            Err(RelayError::EmptyPayload)
        ));
        assert!(matches!(
            ResponseShape::ImagesArray.extract_url(br#"{"images":[]}"#),
            Err(RelayError::EmptyPayload)
        ));
        assert!(matches!(
            ResponseShape::SimpleObject.extract_url(br#"{"url":""}"#),
            Err(RelayError::EmptyPayload)
        ));
    }

    #[test]
    fn malformed_bodies_are_json_errors() {
        assert!(matches!(
            ResponseShape::SimpleObject.extract_url(b"<html>oops</html>"),
            Err(RelayError::Json(_))
        ));
        assert!(matches!(
            ResponseShape::ResultsArray.extract_url(br#"{"url":"wrong shape"}"#),
            Err(RelayError::Json(_))
        ));
        assert!(matches!(
            ResponseShape::Credentialed.extract_url(b""),
            Err(RelayError::Json(_))
        ));
    }
}
