//! Bundle extraction and parsing errors

use super::BundlesmithError;

/// Creates a delimiter not found error
pub fn delimiter_not_found(debug_path: impl Into<String>) -> BundlesmithError {
    BundlesmithError::DelimiterNotFound {
        debug_path: debug_path.into(),
    }
}

/// Creates an invalid JSON error
pub fn invalid_json(
    reason: impl Into<String>,
    debug_path: impl Into<String>,
) -> BundlesmithError {
    BundlesmithError::InvalidJson {
        reason: reason.into(),
        debug_path: debug_path.into(),
    }
}

/// Creates a missing field error
pub fn missing_field(field: impl Into<String>) -> BundlesmithError {
    BundlesmithError::BundleMissingField {
        field: field.into(),
    }
}

/// Creates a parse failed error for a bundle file on disk
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::BundleParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsafe path error
pub fn unsafe_path(path: impl Into<String>) -> BundlesmithError {
    BundlesmithError::UnsafeBundlePath { path: path.into() }
}
