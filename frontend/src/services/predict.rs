//! HTTP service sending images to the prediction endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::error::TransportError;
use crate::types::{PredictionResponse, SelectedFile};
use crate::IMAGE_FIELD;

/// Field name and filename of the multipart part carrying the image.
pub fn image_part<P>(file: &SelectedFile<P>) -> (&'static str, &str) {
    (IMAGE_FIELD, &file.name)
}

/// Upload an image as multipart form data and decode the JSON answer.
///
/// The status code is not checked: the service reports failures in the
/// body, with a non-success `status`.
pub async fn predict_image(
    file: &SelectedFile<File>,
    url: &str,
) -> Result<PredictionResponse, TransportError> {
    let form_data = FormData::new()
        .map_err(|e| TransportError::Request(format!("Failed to create FormData: {:?}", e)))?;

    let (field, filename) = image_part(file);
    form_data
        .append_with_blob_and_filename(field, &file.payload, filename)
        .map_err(|e| TransportError::Request(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| TransportError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;

    log::debug!("POST {} -> {}", url, response.status());

    let body = response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))?;

    if let Some(status) = &body.drive_upload_status {
        log::debug!("Archive upload status: {}", status);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        // Shape returned by the classification service on success
        let json = r#"{
            "status": "success",
            "class": "Basketball",
            "confidence": 0.8731,
            "drive_upload_status": "success"
        }"#;

        let result: Result<PredictionResponse, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let response = result.unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.class.as_deref(), Some("Basketball"));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_failure_deserialization() {
        let json = r#"{"status": "fail", "error": "File too large"}"#;

        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "fail");
        assert_eq!(response.error.as_deref(), Some("File too large"));
        assert_eq!(response.confidence, None);
    }

    #[test]
    fn test_image_part_uses_field_and_file_name() {
        let file = SelectedFile::new("match.jpg", "image/jpeg", vec![0xFFu8, 0xD8]);
        assert_eq!(image_part(&file), ("image", "match.jpg"));
    }

    #[test]
    fn test_non_json_body_fails() {
        let result: Result<PredictionResponse, _> = serde_json::from_str("<html>502</html>");
        assert!(result.is_err());
    }
}
