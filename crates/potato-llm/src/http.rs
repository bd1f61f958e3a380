//! Shared HTTP response helpers.

use crate::error::GenerateError;

/// Return the response unchanged on success, else [`GenerateError::Status`]
/// carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GenerateError> {
    if !resp.status().is_success() {
        return Err(GenerateError::Status {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
