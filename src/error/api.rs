//! Anthropic API errors

use super::BundlesmithError;

/// Creates a client build failed error
pub fn client_build_failed(reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::ClientBuildFailed {
        reason: reason.into(),
    }
}

/// Creates a request failed error
pub fn request_failed(reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::ApiRequestFailed {
        reason: reason.into(),
    }
}

/// Creates a bad status error from a non-success HTTP response
pub fn bad_status(status: u16, body: impl Into<String>) -> BundlesmithError {
    BundlesmithError::ApiBadStatus {
        status,
        body: body.into(),
    }
}

/// Creates a stream failed error
pub fn stream_failed(reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::StreamFailed {
        reason: reason.into(),
    }
}
